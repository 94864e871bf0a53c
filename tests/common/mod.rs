//! Shared enum fixtures for the integration suites.
//!
//! These reproduce the runtime objects the TypeScript compiler emits for:
//!
//! ```text
//! enum NumericEnum { Zero, One }
//! enum StringEnum { Alpha = 'A', Bravo = 'B' }
//! enum HeterogeneousEnum { Zero, One, Alpha = 'A', Bravo = 'B' }
//! enum SixMemberEnum { Zero, One, Two = 'Z', Three = 'A', Four = 'S', Five = -1 }
//! ```

#![allow(dead_code)]

use tsenum::{EnumMember, EnumObject};

pub fn numeric_enum() -> EnumObject {
    let mut object = EnumObject::new();
    object.define_number("Zero", 0.0).define_number("One", 1.0);
    object
}

pub fn string_enum() -> EnumObject {
    let mut object = EnumObject::new();
    object.define_string("Alpha", "A").define_string("Bravo", "B");
    object
}

pub fn heterogeneous_enum() -> EnumObject {
    let mut object = EnumObject::new();
    object
        .define_number("Zero", 0.0)
        .define_number("One", 1.0)
        .define_string("Alpha", "A")
        .define_string("Bravo", "B");
    object
}

pub fn six_member_enum() -> EnumObject {
    let mut object = EnumObject::new();
    object
        .define_number("Zero", 0.0)
        .define_number("One", 1.0)
        .define_string("Two", "Z")
        .define_string("Three", "A")
        .define_string("Four", "S")
        .define_number("Five", -1.0);
    object
}

pub fn num(value: f64) -> EnumMember {
    EnumMember::number(value).expect("finite test member")
}

pub fn str_member(value: &str) -> EnumMember {
    EnumMember::string(value)
}
