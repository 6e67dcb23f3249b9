pub mod deep_fryer;
pub mod pricing;

pub use deep_fryer::{
    MIN_PRICE_COEFFICIENT, corrupt_text, flavor_price_coefficient, make_crispy, make_edible,
    try_make_mob_into_food,
};
pub use pricing::fried_price;
