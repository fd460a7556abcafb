//! Inventory of the reference property: 321 rooms in 16 categories.
//!
//! King and double categories upgrade within their bed type first; the
//! cross-class paths swap bed type and are consent-only. Named suites are
//! reserved, and the three accessible categories are listed in the order
//! they are scanned.

use crate::catalog::types::{CategoryConfig, PolicyConfig};

pub fn reference_property_policy() -> PolicyConfig {
    PolicyConfig::new(vec![
        CategoryConfig::new("KNGN", 94)
            .with_label("Standard King")
            .with_quality_tier(1),
        CategoryConfig::new("TDBN", 126)
            .with_label("Standard 2 Double")
            .with_quality_tier(1),
        CategoryConfig::new("KSVN", 44)
            .with_label("Park View King")
            .with_quality_tier(2),
        CategoryConfig::new("TSVN", 20)
            .with_label("Park View Double")
            .with_quality_tier(2),
        CategoryConfig::new("NKSQA", 13)
            .with_label("King Accessible (tub)")
            .with_quality_tier(1)
            .accessible(),
        CategoryConfig::new("NKSQB", 2)
            .with_label("King Accessible (roll-in)")
            .with_quality_tier(1)
            .accessible(),
        CategoryConfig::new("NDSPXC", 5)
            .with_label("Premium Corner Double")
            .with_quality_tier(3),
        CategoryConfig::new("TCSN", 5)
            .with_label("Conference Suite")
            .with_quality_tier(3),
        CategoryConfig::new("KEXN", 3)
            .with_label("Executive King")
            .with_quality_tier(3),
        CategoryConfig::new("NKSCJ", 2)
            .with_label("Park View King Corner")
            .with_quality_tier(3),
        CategoryConfig::new("NKSPK", 2)
            .with_label("Premium Park View King")
            .with_quality_tier(3),
        CategoryConfig::new("NKSP", 1)
            .with_label("Premium King")
            .with_quality_tier(3),
        CategoryConfig::new("NKSPD", 1)
            .with_label("Premium King Accessible")
            .with_quality_tier(3)
            .accessible(),
        CategoryConfig::new("KSLN", 1)
            .with_label("Centennial Suite")
            .with_quality_tier(4)
            .reserved(),
        CategoryConfig::new("KSPN", 1)
            .with_label("Presidential Suite")
            .with_quality_tier(4)
            .reserved(),
        CategoryConfig::new("KOTN", 1)
            .with_label("Governor's Suite")
            .with_quality_tier(4)
            .reserved(),
    ])
    .with_preferred_upgrades("KNGN", &["KSVN", "KEXN", "NKSP", "NKSPK", "NKSCJ"])
    .with_preferred_upgrades("KSVN", &["KEXN", "NKSPK", "NKSCJ", "NKSP"])
    .with_preferred_upgrades("KEXN", &["NKSPK", "NKSCJ", "NKSP"])
    .with_preferred_upgrades("TDBN", &["TSVN", "TCSN", "NDSPXC"])
    .with_preferred_upgrades("TSVN", &["TCSN", "NDSPXC"])
    .with_preferred_upgrades("NKSQA", &["NKSQB", "NKSPD"])
    .with_preferred_upgrades("NKSQB", &["NKSPD"])
    .with_cross_class_upgrades("TDBN", &["KNGN", "KSVN", "KEXN", "NKSP"])
    .with_cross_class_upgrades("TSVN", &["KSVN", "KEXN", "NKSP"])
    .with_cross_class_upgrades("TCSN", &["KEXN", "NKSP"])
    .with_cross_class_upgrades("NDSPXC", &["KSVN", "KEXN"])
    .with_cross_class_upgrades("KNGN", &["TDBN", "TSVN", "TCSN"])
    .with_cross_class_upgrades("KSVN", &["TSVN", "TCSN", "NDSPXC"])
    .with_cross_class_upgrades("KEXN", &["TSVN", "TCSN", "NDSPXC"])
    .with_cross_class_upgrades("NKSP", &["KNGN", "KSVN", "KEXN"])
    .with_cross_class_upgrades("NKSPK", &["KSVN", "KEXN", "KNGN"])
    .with_cross_class_upgrades("NKSCJ", &["KSVN", "KEXN", "KNGN"])
    .with_cross_class_upgrades("NKSQA", &["KNGN", "KSVN"])
    .with_cross_class_upgrades("NKSQB", &["KNGN", "KSVN"])
    .with_cross_class_upgrades("NKSPD", &["NKSP", "KEXN", "KSVN"])
}
