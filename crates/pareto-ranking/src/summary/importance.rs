//! Domain keyword weights for key-phrase scoring.
//!
//! Defect, material, component and process vocabulary of a fabrication
//! shop floor. Words outside the table fall back to length tiers.

/// Fixed weight for a domain keyword, if it has one.
pub fn domain_weight(word: &str) -> Option<u32> {
    let weight = match word {
        // defects
        "rusak" | "pecah" | "retak" | "bocor" | "patah" | "bengkok" | "kotor" | "cacat"
        | "gagal" | "error" | "salah" | "keliru" | "miring" | "geser" | "longgar" | "reject"
        | "defect" | "scratch" | "dent" | "baret" | "penyok" => 10,
        // materials and quality attributes
        "material" | "bahan" | "kaca" | "aluminium" | "kayu" | "plat" | "besi" | "stainless"
        | "karet" | "plastik" | "cat" | "finishing" | "powder" | "coating" | "sealant"
        | "dimensi" | "ukuran" | "warna" | "bentuk" | "kualitas" | "spec" | "spesifikasi"
        | "tolerance" | "standar" => 9,
        // deviations, components, process steps
        "kurang" | "beda" | "berbeda" | "pintu" | "jendela" | "frame" | "panel" | "handle"
        | "kunci" | "engsel" | "rel" | "roller" | "glass" | "profil" | "aksesoris"
        | "bracket" | "corner" | "gasket" | "welding" | "las" | "cutting" | "potong"
        | "drilling" | "bor" | "assembly" | "rakit" | "packing" | "kirim" | "produksi"
        | "mesin" | "setting" => 8,
        "proses" | "alat" => 7,
        _ => return None,
    };
    Some(weight)
}

/// Importance used when summarising a whole cluster.
pub fn cluster_importance(word: &str) -> u32 {
    domain_weight(word).unwrap_or(if word.chars().count() > 5 { 3 } else { 1 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_tiers() {
        assert_eq!(domain_weight("pecah"), Some(10));
        assert_eq!(domain_weight("kaca"), Some(9));
        assert_eq!(domain_weight("packing"), Some(8));
        assert_eq!(domain_weight("proses"), Some(7));
        assert_eq!(domain_weight("laporan"), None);
    }

    #[test]
    fn cluster_fallback_is_length_based() {
        assert_eq!(cluster_importance("laporan"), 3);
        assert_eq!(cluster_importance("area"), 1);
        assert_eq!(cluster_importance("engsel"), 8);
    }
}
