use crate::types::laptop::{Ram, Storage};
use crate::types::scoring::{clamp_score, Score};

const RAM_SPEED_FLOOR_MTS: f32 = 3200.0;
const RAM_SPEED_CEILING_MTS: f32 = 7500.0;
const STORAGE_FLOOR_GB: f32 = 256.0;

const WEIGHT_RAM_SIZE: f32 = 0.50;
const WEIGHT_RAM_SPEED: f32 = 0.15;
const WEIGHT_UPGRADABLE: f32 = 0.10;
const WEIGHT_STORAGE: f32 = 0.20;
const WEIGHT_SECOND_SLOT: f32 = 0.05;

/// 8 GB -> 25, 16 GB -> 50, 32 GB -> 75, 64 GB and up -> 100.
fn ram_size_points(size_gb: u16) -> f32 {
    if size_gb == 0 {
        return 0.0;
    }
    ((f32::from(size_gb).log2() - 2.0) * 25.0).clamp(0.0, 100.0)
}

/// 256 GB -> 0, 512 GB -> 33, 1 TB -> 67, 2 TB and up -> 100.
fn storage_points(size_gb: u32) -> f32 {
    if size_gb == 0 {
        return 0.0;
    }
    ((size_gb as f32 / STORAGE_FLOOR_GB).log2() / 3.0 * 100.0).clamp(0.0, 100.0)
}

pub fn memory_score(ram: &Ram, storage: &Storage) -> Score {
    let speed = ((ram.speed_mts as f32 - RAM_SPEED_FLOOR_MTS)
        / (RAM_SPEED_CEILING_MTS - RAM_SPEED_FLOOR_MTS))
        .clamp(0.0, 1.0)
        * 100.0;
    let upgradable = if ram.soldered { 0.0 } else { 100.0 };
    let second_slot = if storage.slots > 1 { 100.0 } else { 0.0 };

    clamp_score(
        ram_size_points(ram.size_gb) * WEIGHT_RAM_SIZE
            + speed * WEIGHT_RAM_SPEED
            + upgradable * WEIGHT_UPGRADABLE
            + storage_points(storage.size_gb) * WEIGHT_STORAGE
            + second_slot * WEIGHT_SECOND_SLOT,
    )
}
