//! Storefront catalog
//!
//! Static product cards. Defined at load time and never mutated; the
//! configurators own the option tables, the catalog owns what the card
//! shows before any configuration.

use shared::catalog::{Product, ProductImage};

fn image(src: &str, alt: &str, description: &str, name: &str, price: f64) -> ProductImage {
    ProductImage {
        src: src.to_string(),
        alt: alt.to_string(),
        description: description.to_string(),
        name: name.to_string(),
        price,
    }
}

fn product(
    id: &str,
    name: &str,
    description: &str,
    price: f64,
    images: Vec<ProductImage>,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: Some(description.to_string()),
        price,
        images,
    }
}

/// Every product card on the menu, in display order
pub fn catalog() -> Vec<Product> {
    vec![
        product(
            "bolo-redondo",
            "Bolo Redondo",
            "Varios tipos de bolos redondos, monte o seu",
            110.0,
            vec![
                image("/redondo-17.jpeg", "Bolo redondo 17cm", "Bolo redondo 17cm", "Bolo Redondo 17cm", 110.0),
                image("/redondo-23.jpeg", "Bolo redondo 23cm", "Bolo redondo 23cm", "Bolo Redondo 23cm", 160.0),
                image("/redondo-28.jpeg", "Bolo redondo 28cm", "Bolo redondo 28cm", "Bolo Redondo 28cm", 210.0),
            ],
        ),
        product(
            "bolo-retangular",
            "Bolo Retangular",
            "Bolo retangular personalizado",
            110.0,
            vec![
                image("/retangular-25.jpeg", "Bolo Retangular 25cm", "Bolo Retangular 25cm", "Bolo Retangular 25x20cm", 200.0),
                image("/retangular-33.jpeg", "Bolo Retangular 33cm", "Bolo Retangular 33cm", "Bolo Retangular 33x25cm", 300.0),
                image("/retangular-40.jpeg", "Bolo Retangular 40cm", "Bolo Retangular 40cm", "Bolo Retangular 40x25cm", 350.0),
            ],
        ),
        product(
            "bolo-metro",
            "Bolo de Metro",
            "Meio metro e 1 metro de bolo personalizado",
            600.0,
            vec![
                image("/meio-metro.jpeg", "Bolo meio metro", "Bolo meio metro", "Bolo Meio Metro", 600.0),
                image("/um-metro.jpeg", "Bolo um metro", "Bolo um metro", "Bolo Um Metro", 1200.0),
            ],
        ),
        product(
            "bolo-andar",
            "Bolo de Andar",
            "Bolo de 2 ou 3 andares para ocasiões especiais",
            450.0,
            vec![image(
                "/bolo-de-andar.jpg",
                "Bolo de Andar",
                "Bolo de andar para casamentos e festas",
                "Bolo de Andar",
                450.0,
            )],
        ),
        product(
            "naked-cake",
            "Naked Cake",
            "Bolo com cobertura rústica e decoração natural",
            120.0,
            vec![image(
                "/naked-cake.jpg",
                "Naked Cake",
                "Naked cake com frutas frescas",
                "Naked Cake",
                120.0,
            )],
        ),
        product(
            "bolo-piscina",
            "Bolo Piscina",
            "Bolo decorado com tema de piscina",
            40.0,
            vec![image(
                "/bolo-piscina.jpg",
                "Bolo Piscina",
                "Bolo piscina para festas de verão",
                "Bolo Piscina",
                40.0,
            )],
        ),
        product(
            "bolo-vulcao",
            "Bolo Vulcão",
            "Bolo com cobertura derretida simulando um vulcão",
            45.0,
            vec![
                image("/bolo-vulcao-tradicional.jpg", "Bolo Vulcão Tradicional", "Bolo vulcão tradicional", "Bolo Vulcão Tradicional", 45.0),
                image("/bolo-vulcao-gigante.jpg", "Bolo Vulcão Gigante", "Bolo vulcão gigante", "Bolo Vulcão Gigante", 80.0),
            ],
        ),
        product(
            "cupcake",
            "Cupcakes",
            "Minibolos decorados individualmente",
            3.5,
            vec![
                image("/cupcake-simples.jpg", "Cupcake Simples", "Cupcake simples", "Cupcake Simples", 3.5),
                image("/cupcake-recheado.jpg", "Cupcake Recheado", "Cupcake recheado", "Cupcake Recheado", 4.0),
            ],
        ),
        product(
            "docinhos",
            "Docinhos",
            "Docinhos variados para festas",
            70.0,
            vec![image(
                "/docinhos.jpg",
                "Docinhos",
                "Docinhos variados",
                "Docinhos",
                70.0,
            )],
        ),
        product(
            "bolo-marmita",
            "Bolo na Marmita",
            "Bolo individual na marmita, vendido por unidade",
            8.0,
            vec![image(
                "/bolo-marmita.jpg",
                "Bolo na Marmita",
                "Bolo na Marmita Personalizado",
                "Bolo na Marmita",
                8.0,
            )],
        ),
        product(
            "bolo-aquario",
            "Bolo Aquário",
            "Bolo decorado com tema marinho, entrega grátis",
            150.0,
            vec![
                image("/bolo-aquario-1.jpg", "Bolo Aquário 1", "Bolo Aquário decorado com tema marinho", "Bolo Aquário", 150.0),
                image("/bolo-aquario-2.jpg", "Bolo Aquário 2", "Bolo Aquário com decoração de peixes", "Bolo Aquário", 150.0),
            ],
        ),
    ]
}
