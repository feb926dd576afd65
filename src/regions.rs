//! Named Antarctic regions in EPSG:3031 meters

use crate::coordinate::Region;

pub const ANTARCTICA: Region = Region::from_bounds(-2800e3, 2800e3, -2800e3, 2800e3);
pub const WEST_ANTARCTICA: Region = Region::from_bounds(-2740e3, 570e3, -2150e3, 1670e3);
pub const EAST_ANTARCTICA: Region = Region::from_bounds(-840e3, 2880e3, -2400e3, 2600e3);
pub const ANTARCTIC_PENINSULA: Region = Region::from_bounds(-2600e3, -1200e3, 170e3, 1800e3);
pub const MARIE_BYRD_LAND: Region = Region::from_bounds(-1500e3, -500e3, -1350e3, -800e3);
pub const VICTORIA_LAND: Region = Region::from_bounds(100e3, 1000e3, -2200e3, -1000e3);

// Ross embayment
pub const ROSS_ICE_SHELF: Region = Region::from_bounds(-680e3, 470e3, -1420e3, -310e3);
pub const SIPLE_COAST: Region = Region::from_bounds(-700e3, 30e3, -1110e3, -450e3);
pub const SAUNDERS_COAST: Region = Region::from_bounds(-980e3, -600e3, -1350e3, -1100e3);
pub const ROOSEVELT_ISLAND: Region = Region::from_bounds(-480e3, -240e3, -1220e3, -980e3);
pub const ROSS_ISLAND: Region = Region::from_bounds(210e3, 360e3, -1400e3, -1250e3);
pub const MINNA_BLUFF: Region = Region::from_bounds(210e3, 390e3, -1310e3, -1120e3);
pub const MCMURDO_DRY_VALLEYS: Region = Region::from_bounds(320e3, 480e3, -1400e3, -1220e3);
pub const CRARY_ICE_RISE: Region = Region::from_bounds(-330e3, -40e3, -1100e3, -950e3);
pub const SIPLE_DOME: Region = Region::from_bounds(-630e3, -270e3, -970e3, -630e3);
pub const ROSS_SEA: Region = Region::from_bounds(-500e3, 450e3, -2100e3, -1300e3);

// Other ice shelves and seas
pub const RONNE_FILCHNER_ICE_SHELF: Region = Region::from_bounds(-1550e3, -500e3, 80e3, 1100e3);
pub const AMERY_ICE_SHELF: Region = Region::from_bounds(1530e3, 2460e3, 570e3, 1100e3);
pub const LARSEN_ICE_SHELF: Region = Region::from_bounds(-2430e3, -1920e3, 900e3, 1400e3);
pub const AMUNDSEN_SEA: Region = Region::from_bounds(-1800e3, -800e3, -800e3, -200e3);

const NAMED: &[(&str, Region)] = &[
    ("antarctica", ANTARCTICA),
    ("west_antarctica", WEST_ANTARCTICA),
    ("east_antarctica", EAST_ANTARCTICA),
    ("antarctic_peninsula", ANTARCTIC_PENINSULA),
    ("marie_byrd_land", MARIE_BYRD_LAND),
    ("victoria_land", VICTORIA_LAND),
    ("ross_ice_shelf", ROSS_ICE_SHELF),
    ("siple_coast", SIPLE_COAST),
    ("saunders_coast", SAUNDERS_COAST),
    ("roosevelt_island", ROOSEVELT_ISLAND),
    ("ross_island", ROSS_ISLAND),
    ("minna_bluff", MINNA_BLUFF),
    ("mcmurdo_dry_valleys", MCMURDO_DRY_VALLEYS),
    ("crary_ice_rise", CRARY_ICE_RISE),
    ("siple_dome", SIPLE_DOME),
    ("ross_sea", ROSS_SEA),
    ("ronne_filchner_ice_shelf", RONNE_FILCHNER_ICE_SHELF),
    ("amery_ice_shelf", AMERY_ICE_SHELF),
    ("larsen_ice_shelf", LARSEN_ICE_SHELF),
    ("amundsen_sea", AMUNDSEN_SEA),
];

/// Look up a named region (case-insensitive, spaces or dashes allowed)
pub fn by_name(name: &str) -> Option<Region> {
    let key = name.trim().to_lowercase().replace([' ', '-'], "_");
    NAMED.iter()
        .find(|(n, _)| *n == key)
        .map(|(_, region)| *region)
}

/// Names of all built-in regions
pub fn names() -> impl Iterator<Item = &'static str> {
    NAMED.iter().map(|(n, _)| *n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_regions_are_valid() {
        for (name, region) in NAMED {
            assert!(region.validate().is_ok(), "{} is invalid", name);
        }
        assert_eq!(names().count(), NAMED.len());
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(by_name("Ross Ice Shelf"), Some(ROSS_ICE_SHELF));
        assert_eq!(by_name("ross-ice-shelf"), Some(ROSS_ICE_SHELF));
        assert_eq!(by_name("greenland"), None);
    }
}
