pub mod stage1_zones;
pub mod stage2_skill;
pub mod stage3_factors;
pub mod stage4_compose;
pub mod stage5_normalize;
pub mod stage6_aggregate;
