pub mod profile;
pub mod shot;
pub mod skill;
pub mod stats;
pub mod zones;
