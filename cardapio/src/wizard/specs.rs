//! Per-product rule tables
//!
//! One [`ProductSpec`] per dialog on the menu. The shared option tables
//! (fillings, extras, slot sets) are factored out; everything
//! product-specific (tiers, fees, lead times, step order) stays in the
//! product's own constructor.

use super::{
    BatchOption, ExtraOption, FillingOption, FlavorOption, ItemImage, KindOption, NameSuffix,
    ProductSpec, SizeDisplay, SizeOption, StepSpec, TopperOption,
};

/// Flat fee for choosing two fillings instead of one
const SECOND_FILLING_FEE: f64 = 10.0;

/// Flat delivery fee for products that charge one
const DELIVERY_FEE: f64 = 20.0;

fn simple_fillings() -> Vec<&'static str> {
    vec![
        "4 Leites",
        "Brigadeiro",
        "Leite Ninho",
        "Chocolate",
        "Morango ao Leite",
        "Maracujá ao Leite",
    ]
}

fn gourmet_fillings() -> Vec<FillingOption> {
    [
        ("4 Leites com Abacaxi", 20.0),
        ("Brigadeiro Tradicional com Morango Fresco", 25.0),
        ("Leite Ninho com Morango Fresco", 25.0),
        ("Doce de Leite com Ameixa", 30.0),
        ("Prestígio", 20.0),
        ("Leite Ninho com Nutella", 25.0),
        ("Nozes", 25.0),
        ("Recheio de Bombom", 30.0),
        ("Recheio de Ganache Meio Amargo", 30.0),
        ("Recheio Ferrero Rocher", 30.0),
        ("Ganache", 30.0),
        ("Recheio Ouro Branco", 25.0),
    ]
    .into_iter()
    .map(|(name, surcharge)| FillingOption { name, surcharge })
    .collect()
}

fn decoration_extras() -> Vec<ExtraOption> {
    [
        ("Pérolas", 10.0),
        ("Brigadeiros", 20.0),
        ("Morangos", 20.0),
        ("Glitter", 20.0),
        ("Brilho", 20.0),
    ]
    .into_iter()
    .map(|(name, price)| ExtraOption { name, price })
    .collect()
}

/// One-hour windows through the day
fn hourly_slots() -> Vec<&'static str> {
    vec![
        "09:00 - 10:00",
        "10:00 - 11:00",
        "11:00 - 12:00",
        "14:00 - 15:00",
        "15:00 - 16:00",
        "16:00 - 17:00",
        "17:00 - 18:00",
    ]
}

/// Wide windows used by the larger cakes
fn wide_slots() -> Vec<&'static str> {
    vec!["09:00 - 12:00", "14:00 - 17:00", "18:00 - 21:00"]
}

fn filling_steps() -> [StepSpec; 2] {
    [
        StepSpec::FillingCount {
            second_fee: SECOND_FILLING_FEE,
        },
        StepSpec::Fillings {
            simple: simple_fillings(),
            gourmet: gourmet_fillings(),
        },
    ]
}

pub fn bolo_redondo() -> ProductSpec {
    let [count, fillings] = filling_steps();
    ProductSpec {
        slug: "bolo-redondo",
        name: "Bolo Redondo",
        name_suffix: NameSuffix::None,
        fixed_price: None,
        fixed_size: None,
        steps: vec![
            StepSpec::Batter {
                options: vec!["Amanteigada", "Chocolate", "Pão de Ló"],
            },
            count,
            fillings,
            StepSpec::Size {
                options: vec![
                    SizeOption {
                        id: "17cm",
                        name: "17 cm (10 a 15 fatias)",
                        description: None,
                        price: 110.0,
                    },
                    SizeOption {
                        id: "23cm",
                        name: "23 cm (20 a 25 fatias)",
                        description: None,
                        price: 160.0,
                    },
                    SizeOption {
                        id: "28cm",
                        name: "28 cm (30 a 35 fatias)",
                        description: None,
                        price: 210.0,
                    },
                ],
                display: SizeDisplay::Name,
            },
            StepSpec::Extras {
                options: decoration_extras(),
            },
            StepSpec::DeliveryDate { min_lead_days: 4 },
            StepSpec::Fulfilment {
                pickup_slots: hourly_slots(),
                delivery_slots: hourly_slots(),
                delivery_fee: DELIVERY_FEE,
                require_slot: true,
            },
        ],
        images: vec![ItemImage {
            src: "/redondo-17.jpeg",
            alt: "Bolo Redondo",
            description: "Bolo Redondo Personalizado",
        }],
    }
}

pub fn bolo_retangular() -> ProductSpec {
    let [count, fillings] = filling_steps();
    ProductSpec {
        slug: "bolo-retangular",
        name: "Bolo Retangular",
        name_suffix: NameSuffix::None,
        fixed_price: None,
        fixed_size: None,
        steps: vec![
            StepSpec::Batter {
                options: vec!["Amanteigada", "Chocolate", "Pão de Ló"],
            },
            count,
            fillings,
            StepSpec::Size {
                options: vec![
                    SizeOption {
                        id: "25x20",
                        name: "25x20 cm (20 a 25 fatias)",
                        description: None,
                        price: 200.0,
                    },
                    SizeOption {
                        id: "33x25",
                        name: "33x25 cm (30 a 35 fatias)",
                        description: None,
                        price: 300.0,
                    },
                    SizeOption {
                        id: "40x25",
                        name: "40x25 cm (40 a 45 fatias)",
                        description: None,
                        price: 350.0,
                    },
                ],
                display: SizeDisplay::Name,
            },
            StepSpec::Topper {
                options: vec![
                    TopperOption {
                        id: "simples",
                        name: "Simples",
                        prices: &[("25x20", 15.0), ("33x25", 20.0), ("40x25", 25.0)],
                    },
                    TopperOption {
                        id: "3d",
                        name: "3D",
                        prices: &[("25x20", 25.0), ("33x25", 30.0), ("40x25", 40.0)],
                    },
                ],
            },
            StepSpec::Extras {
                options: decoration_extras(),
            },
            // Same-day orders accepted for this one
            StepSpec::DeliveryDate { min_lead_days: 0 },
            StepSpec::Fulfilment {
                pickup_slots: hourly_slots(),
                delivery_slots: hourly_slots(),
                delivery_fee: DELIVERY_FEE,
                require_slot: true,
            },
        ],
        images: vec![ItemImage {
            src: "/bolo-retangular.jpg",
            alt: "Bolo Retangular",
            description: "Bolo Retangular Personalizado",
        }],
    }
}

pub fn bolo_metro() -> ProductSpec {
    let [count, fillings] = filling_steps();
    ProductSpec {
        slug: "bolo-metro",
        name: "Bolo de Metro",
        name_suffix: NameSuffix::None,
        fixed_price: None,
        fixed_size: None,
        steps: vec![
            StepSpec::Size {
                options: vec![
                    SizeOption {
                        id: "meio-metro",
                        name: "Meio Metro (50 a 60 fatias)",
                        description: None,
                        price: 600.0,
                    },
                    SizeOption {
                        id: "um-metro",
                        name: "Um Metro (100 a 120 fatias)",
                        description: None,
                        price: 1200.0,
                    },
                ],
                display: SizeDisplay::Name,
            },
            StepSpec::Batter {
                options: vec!["Amanteigada", "Chocolate"],
            },
            count,
            fillings,
            StepSpec::Extras {
                options: decoration_extras(),
            },
            StepSpec::DeliveryDate { min_lead_days: 4 },
            StepSpec::Fulfilment {
                pickup_slots: wide_slots(),
                delivery_slots: wide_slots(),
                delivery_fee: DELIVERY_FEE,
                require_slot: true,
            },
        ],
        images: vec![ItemImage {
            src: "/meio-metro.jpeg",
            alt: "Bolo de Metro",
            description: "Bolo de Metro Personalizado",
        }],
    }
}

pub fn bolo_andar() -> ProductSpec {
    let [count, fillings] = filling_steps();
    ProductSpec {
        slug: "bolo-andar",
        name: "Bolo de Andar",
        name_suffix: NameSuffix::None,
        fixed_price: None,
        fixed_size: None,
        steps: vec![
            StepSpec::Size {
                options: vec![
                    SizeOption {
                        id: "2-andares",
                        name: "2 Andares (65 a 70 fatias)",
                        description: Some("3 cm em cima, 27 cm embaixo"),
                        price: 450.0,
                    },
                    SizeOption {
                        id: "3-andares",
                        name: "3 Andares (100 fatias)",
                        description: Some("17 cm em cima, 23 cm no meio, 30 cm base"),
                        price: 750.0,
                    },
                ],
                display: SizeDisplay::Name,
            },
            StepSpec::Batter {
                options: vec!["Amanteigada", "Chocolate"],
            },
            count,
            fillings,
            StepSpec::Extras {
                options: decoration_extras(),
            },
            StepSpec::DeliveryDate { min_lead_days: 4 },
            StepSpec::Fulfilment {
                pickup_slots: wide_slots(),
                delivery_slots: wide_slots(),
                delivery_fee: DELIVERY_FEE,
                require_slot: true,
            },
        ],
        images: vec![ItemImage {
            src: "/bolo-de-andar.jpg",
            alt: "Bolo de Andar",
            description: "Bolo de Andar Personalizado",
        }],
    }
}

pub fn naked_cake() -> ProductSpec {
    ProductSpec {
        slug: "naked-cake",
        name: "Naked Cake",
        name_suffix: NameSuffix::None,
        fixed_price: Some(120.0),
        fixed_size: None,
        steps: vec![StepSpec::DeliveryDate { min_lead_days: 4 }],
        images: vec![ItemImage {
            src: "/naked-cake.jpg",
            alt: "Naked Cake",
            description: "Naked cake com frutas frescas",
        }],
    }
}

pub fn bolo_piscina() -> ProductSpec {
    ProductSpec {
        slug: "bolo-piscina",
        name: "Bolo Piscina",
        name_suffix: NameSuffix::None,
        fixed_price: Some(40.0),
        fixed_size: Some("Rende de 15 a 20 fatias"),
        steps: vec![StepSpec::DeliveryDate { min_lead_days: 4 }],
        images: vec![ItemImage {
            src: "/bolo-piscina.jpg",
            alt: "Bolo Piscina",
            description: "Bolo Piscina Decorado",
        }],
    }
}

pub fn bolo_vulcao() -> ProductSpec {
    ProductSpec {
        slug: "bolo-vulcao",
        name: "Bolo Vulcão",
        name_suffix: NameSuffix::Size,
        fixed_price: None,
        fixed_size: None,
        steps: vec![
            StepSpec::Size {
                options: vec![
                    SizeOption {
                        id: "tradicional",
                        name: "Tradicional",
                        description: Some("Rende de 15 a 20 fatias"),
                        price: 45.0,
                    },
                    SizeOption {
                        id: "gigante",
                        name: "Gigante",
                        description: Some("Rende de 20 a 25 fatias"),
                        price: 80.0,
                    },
                ],
                // The size line on the order reads "Rende de …", not the tier name
                display: SizeDisplay::Description,
            },
            StepSpec::DeliveryDate { min_lead_days: 4 },
        ],
        images: vec![ItemImage {
            src: "/bolo-vulcao.jpg",
            alt: "Bolo Vulcão",
            description: "Bolo Vulcão",
        }],
    }
}

pub fn cupcake() -> ProductSpec {
    ProductSpec {
        slug: "cupcake",
        name: "Cupcake",
        name_suffix: NameSuffix::Kind,
        fixed_price: None,
        fixed_size: None,
        steps: vec![
            StepSpec::KindQuantity {
                options: vec![
                    KindOption {
                        id: "simples",
                        name: "Simples",
                        unit_price: 3.5,
                    },
                    KindOption {
                        id: "recheado",
                        name: "Recheado",
                        unit_price: 4.0,
                    },
                ],
                min_quantity: 10,
            },
            StepSpec::KindFilling {
                options: vec!["Doce de leite", "Leite Ninho", "Brigadeiro", "Morango ao Leite"],
                for_kinds: &["recheado"],
            },
            StepSpec::DeliveryDate { min_lead_days: 4 },
        ],
        images: vec![ItemImage {
            src: "/cupcake.jpg",
            alt: "Cupcake",
            description: "Cupcake decorado",
        }],
    }
}

pub fn docinhos() -> ProductSpec {
    ProductSpec {
        slug: "docinhos",
        name: "Docinhos",
        name_suffix: NameSuffix::None,
        fixed_price: None,
        fixed_size: None,
        steps: vec![
            StepSpec::Flavors {
                options: vec![
                    FlavorOption {
                        id: "brigadeiro",
                        name: "Brigadeiro",
                        surcharge: 0.0,
                    },
                    FlavorOption {
                        id: "beijinho",
                        name: "Beijinho",
                        surcharge: 0.0,
                    },
                    FlavorOption {
                        id: "2amores",
                        name: "2 Amores",
                        surcharge: 0.0,
                    },
                    FlavorOption {
                        id: "ninhonutella",
                        name: "Ninho com Nutella",
                        surcharge: 20.0,
                    },
                ],
            },
            StepSpec::Batch {
                options: vec![
                    BatchOption {
                        id: "50",
                        name: "50 docinhos",
                        units: 50,
                        price: 70.0,
                    },
                    BatchOption {
                        id: "120",
                        name: "120 docinhos",
                        units: 120,
                        price: 168.0,
                    },
                    BatchOption {
                        id: "150",
                        name: "150 docinhos",
                        units: 150,
                        price: 210.0,
                    },
                ],
            },
            StepSpec::DeliveryDate { min_lead_days: 4 },
            StepSpec::Fulfilment {
                pickup_slots: vec!["11:00", "12:00", "15:00", "18:00", "19:00"],
                delivery_slots: vec!["13:30", "17:30", "18:00", "19:00"],
                delivery_fee: DELIVERY_FEE,
                require_slot: true,
            },
        ],
        images: vec![ItemImage {
            src: "/docinhos.jpg",
            alt: "Docinhos",
            description: "Docinhos variados",
        }],
    }
}

pub fn bolo_marmita() -> ProductSpec {
    let [count, fillings] = filling_steps();
    ProductSpec {
        slug: "bolo-marmita",
        name: "Bolo na Marmita",
        name_suffix: NameSuffix::None,
        fixed_price: None,
        fixed_size: None,
        steps: vec![
            StepSpec::BatterQuantity {
                options: vec!["Amanteigada", "Chocolate", "Pão de Ló"],
                min_quantity: 10,
                unit_price: 8.0,
            },
            count,
            fillings,
            StepSpec::UnitExtra {
                name: "Brigadeiros",
                unit_price: 1.5,
            },
            StepSpec::DeliveryDate { min_lead_days: 4 },
            // No time slots and no fee for the marmita run
            StepSpec::Fulfilment {
                pickup_slots: vec![],
                delivery_slots: vec![],
                delivery_fee: 0.0,
                require_slot: false,
            },
        ],
        images: vec![ItemImage {
            src: "/bolo-marmita.jpg",
            alt: "Bolo na Marmita",
            description: "Bolo na Marmita Personalizado",
        }],
    }
}

pub fn bolo_aquario() -> ProductSpec {
    let [count, fillings] = filling_steps();
    ProductSpec {
        slug: "bolo-aquario",
        name: "Bolo Aquário",
        name_suffix: NameSuffix::None,
        fixed_price: Some(150.0),
        fixed_size: None,
        steps: vec![
            StepSpec::Batter {
                options: vec!["Amanteigada", "Chocolate"],
            },
            count,
            fillings,
            StepSpec::Extras {
                options: decoration_extras(),
            },
            StepSpec::DeliveryDate { min_lead_days: 0 },
            // Delivery and topper are free for this one; address is always taken
            StepSpec::DeliveryAddress {
                slots: hourly_slots(),
            },
        ],
        images: vec![
            ItemImage {
                src: "/bolo-aquario-1.jpg",
                alt: "Bolo Aquário 1",
                description: "Bolo Aquário decorado com tema marinho",
            },
            ItemImage {
                src: "/bolo-aquario-2.jpg",
                alt: "Bolo Aquário 2",
                description: "Bolo Aquário com decoração de peixes",
            },
        ],
    }
}

/// Rule table for a catalog product id, mirroring the storefront dispatch
pub fn spec_for(product_id: &str) -> Option<ProductSpec> {
    match product_id {
        "bolo-redondo" => Some(bolo_redondo()),
        "bolo-retangular" => Some(bolo_retangular()),
        "bolo-metro" => Some(bolo_metro()),
        "bolo-andar" => Some(bolo_andar()),
        "naked-cake" => Some(naked_cake()),
        "bolo-piscina" => Some(bolo_piscina()),
        "bolo-vulcao" => Some(bolo_vulcao()),
        "cupcake" => Some(cupcake()),
        "docinhos" => Some(docinhos()),
        "bolo-marmita" => Some(bolo_marmita()),
        "bolo-aquario" => Some(bolo_aquario()),
        _ => None,
    }
}
