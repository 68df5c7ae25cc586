use serde::{Deserialize, Serialize};

use super::ALL;

/// Category of an architectural plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    Villa,
    Duplex,
    Appartement,
    Commercial,
}

impl PlanType {
    pub const ALL: [PlanType; 4] = [
        PlanType::Villa,
        PlanType::Duplex,
        PlanType::Appartement,
        PlanType::Commercial,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PlanType::Villa => "Villa",
            PlanType::Duplex => "Duplex",
            PlanType::Appartement => "Appartement",
            PlanType::Commercial => "Commercial",
        }
    }
}

impl std::fmt::Display for PlanType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for PlanType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "villa" => Ok(PlanType::Villa),
            "duplex" => Ok(PlanType::Duplex),
            "appartement" => Ok(PlanType::Appartement),
            "commercial" => Ok(PlanType::Commercial),
            _ => Err(format!("unknown plan type: {s}")),
        }
    }
}

/// A catalogue entry used as input to the cost estimator.
///
/// Prices are whole FCFA, surfaces whole square metres.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchitecturalPlan {
    pub id: &'static str,
    pub name: &'static str,
    pub plan_type: PlanType,
    pub style: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub base_surface: u32,
    pub base_price: u64,
    pub price_per_m2: u64,
    /// Storeys above ground floor (R+n)
    pub floors: u8,
    pub rooms: u8,
    pub bathrooms: u8,
    pub popular: bool,
    pub features: &'static [&'static str],
}

/// Add-ons selectable in the estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionKey {
    Piscine,
    Garage,
    Cloture,
    Forage,
    Solaire,
    Climatisation,
}

impl OptionKey {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OptionKey::Piscine => "piscine",
            OptionKey::Garage => "garage",
            OptionKey::Cloture => "cloture",
            OptionKey::Forage => "forage",
            OptionKey::Solaire => "solaire",
            OptionKey::Climatisation => "climatisation",
        }
    }
}

impl std::str::FromStr for OptionKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PLAN_OPTIONS
            .iter()
            .map(|o| o.key)
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown option: {s}"))
    }
}

/// A named add-on with a fixed additional price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanOption {
    pub key: OptionKey,
    pub label: &'static str,
    pub price: u64,
}

static PLANS: &[ArchitecturalPlan] = &[
    ArchitecturalPlan {
        id: "villa-emeraude",
        name: "Villa Émeraude",
        plan_type: PlanType::Villa,
        style: "Moderne",
        description: "Villa de plain-pied aux lignes épurées, séjour traversant ouvert sur la terrasse et suite parentale avec dressing.",
        image: "https://images.pexels.com/photos/8293670/pexels-photo-8293670.jpeg?auto=compress&cs=tinysrgb&w=800",
        base_surface: 150,
        base_price: 25_000_000,
        price_per_m2: 150_000,
        floors: 0,
        rooms: 3,
        bathrooms: 2,
        popular: true,
        features: &[
            "Plans architecturaux complets",
            "Plans de structure béton armé",
            "Plans électriques et plomberie",
            "Rendus 3D extérieurs",
            "Dossier de permis de bâtir",
        ],
    },
    ArchitecturalPlan {
        id: "duplex-horizon",
        name: "Duplex Horizon",
        plan_type: PlanType::Duplex,
        style: "Contemporain",
        description: "Duplex familial avec espaces de réception au rez-de-chaussée et quatre chambres à l'étage, balcon filant en façade.",
        image: "https://images.pexels.com/photos/3860937/pexels-photo-3860937.jpeg?auto=compress&cs=tinysrgb&w=800",
        base_surface: 220,
        base_price: 38_000_000,
        price_per_m2: 160_000,
        floors: 1,
        rooms: 4,
        bathrooms: 3,
        popular: true,
        features: &[
            "Plans architecturaux complets",
            "Plans de structure béton armé",
            "Plans électriques et plomberie",
            "Rendus 3D intérieurs et extérieurs",
            "Dossier de permis de bâtir",
            "Devis quantitatif estimatif",
        ],
    },
    ArchitecturalPlan {
        id: "villa-baobab",
        name: "Villa Baobab",
        plan_type: PlanType::Villa,
        style: "Tropical",
        description: "Villa compacte pensée pour le climat tropical : ventilation naturelle, larges débords de toiture et véranda.",
        image: "https://images.pexels.com/photos/5298215/pexels-photo-5298215.jpeg?auto=compress&cs=tinysrgb&w=800",
        base_surface: 120,
        base_price: 18_000_000,
        price_per_m2: 140_000,
        floors: 0,
        rooms: 3,
        bathrooms: 2,
        popular: false,
        features: &[
            "Plans architecturaux complets",
            "Plans de structure béton armé",
            "Plans électriques et plomberie",
            "Dossier de permis de bâtir",
        ],
    },
    ArchitecturalPlan {
        id: "residence-sanaga",
        name: "Résidence Sanaga",
        plan_type: PlanType::Appartement,
        style: "Résidentiel locatif",
        description: "Immeuble R+2 de six appartements de deux chambres, idéal pour un investissement locatif en zone urbaine.",
        image: "https://images.pexels.com/photos/1117452/pexels-photo-1117452.jpeg?auto=compress&cs=tinysrgb&w=800",
        base_surface: 360,
        base_price: 60_000_000,
        price_per_m2: 155_000,
        floors: 2,
        rooms: 12,
        bathrooms: 6,
        popular: false,
        features: &[
            "Plans architecturaux complets",
            "Note de calcul de structure",
            "Plans électriques et plomberie",
            "Étude de rentabilité locative",
            "Dossier de permis de bâtir",
        ],
    },
    ArchitecturalPlan {
        id: "studio-mfoundi",
        name: "Studio Mfoundi",
        plan_type: PlanType::Appartement,
        style: "Compact",
        description: "Studio optimisé avec kitchenette et salle d'eau, conçu pour être dupliqué en bande ou en étage.",
        image: "https://images.pexels.com/photos/9301291/pexels-photo-9301291.jpeg?auto=compress&cs=tinysrgb&w=800",
        base_surface: 40,
        base_price: 7_500_000,
        price_per_m2: 145_000,
        floors: 0,
        rooms: 1,
        bathrooms: 1,
        popular: false,
        features: &[
            "Plans architecturaux complets",
            "Plans électriques et plomberie",
            "Dossier de permis de bâtir",
        ],
    },
    ArchitecturalPlan {
        id: "espace-commercial",
        name: "Espace Commercial Mvog",
        plan_type: PlanType::Commercial,
        style: "Fonctionnel",
        description: "Bâtiment R+1 avec boutiques en rez-de-chaussée et plateaux de bureaux modulables à l'étage.",
        image: "https://images.unsplash.com/photo-1504307651254-35680f356dfd?w=800&auto=format&fit=crop",
        base_surface: 200,
        base_price: 30_000_000,
        price_per_m2: 135_000,
        floors: 1,
        rooms: 0,
        bathrooms: 2,
        popular: false,
        features: &[
            "Plans architecturaux complets",
            "Plans de structure béton armé",
            "Plans électriques triphasés",
            "Plan de sécurité incendie",
            "Dossier de permis de bâtir",
        ],
    },
];

static PLAN_OPTIONS: &[PlanOption] = &[
    PlanOption {
        key: OptionKey::Piscine,
        label: "Piscine",
        price: 4_500_000,
    },
    PlanOption {
        key: OptionKey::Garage,
        label: "Garage couvert",
        price: 2_500_000,
    },
    PlanOption {
        key: OptionKey::Cloture,
        label: "Clôture & portail",
        price: 1_800_000,
    },
    PlanOption {
        key: OptionKey::Forage,
        label: "Forage d'eau",
        price: 1_200_000,
    },
    PlanOption {
        key: OptionKey::Solaire,
        label: "Panneaux solaires",
        price: 2_000_000,
    },
    PlanOption {
        key: OptionKey::Climatisation,
        label: "Climatisation centrale",
        price: 1_500_000,
    },
];

#[must_use]
pub fn plans() -> &'static [ArchitecturalPlan] {
    PLANS
}

#[must_use]
pub fn plan_by_id(id: &str) -> Option<&'static ArchitecturalPlan> {
    PLANS.iter().find(|p| p.id == id)
}

/// Type filter labels, starting with the "all" pseudo type.
#[must_use]
pub fn plan_types() -> Vec<&'static str> {
    std::iter::once(ALL)
        .chain(PlanType::ALL.iter().map(|t| t.label()))
        .collect()
}

/// Plans of the given type label; "all" (or an unknown label) keeps every plan.
#[must_use]
pub fn filter_plans(type_filter: &str) -> Vec<&'static ArchitecturalPlan> {
    match type_filter.parse::<PlanType>() {
        Ok(plan_type) => PLANS.iter().filter(|p| p.plan_type == plan_type).collect(),
        Err(_) => PLANS.iter().collect(),
    }
}

#[must_use]
pub fn plan_options() -> &'static [PlanOption] {
    PLAN_OPTIONS
}

#[must_use]
pub fn option_by_key(key: OptionKey) -> Option<&'static PlanOption> {
    PLAN_OPTIONS.iter().find(|o| o.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn plan_ids_are_unique() {
        let ids: HashSet<_> = plans().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), plans().len());
    }

    #[test]
    fn plans_have_positive_pricing() {
        for plan in plans() {
            assert!(plan.base_price > 0, "{}", plan.id);
            assert!(plan.price_per_m2 > 0, "{}", plan.id);
            assert!(plan.base_surface > 0, "{}", plan.id);
        }
    }

    #[test]
    fn every_option_is_priced_and_resolvable() {
        for option in plan_options() {
            assert!(option.price > 0);
            assert_eq!(option_by_key(option.key), Some(option));
            assert_eq!(option.key.as_str().parse::<OptionKey>().unwrap(), option.key);
        }
    }

    #[test]
    fn plan_type_from_str_case_insensitive() {
        assert_eq!("VILLA".parse::<PlanType>().unwrap(), PlanType::Villa);
        assert_eq!("Appartement".parse::<PlanType>().unwrap(), PlanType::Appartement);
        assert!("Tous".parse::<PlanType>().is_err());
        assert!("".parse::<PlanType>().is_err());
    }

    #[test]
    fn plan_types_start_with_all() {
        let types = plan_types();
        assert_eq!(types[0], ALL);
        assert_eq!(types.len(), PlanType::ALL.len() + 1);
    }

    #[test]
    fn filter_plans_by_type() {
        assert_eq!(filter_plans(ALL).len(), plans().len());

        let villas = filter_plans("Villa");
        assert_eq!(villas.len(), 2);
        assert!(villas.iter().all(|p| p.plan_type == PlanType::Villa));
    }

    #[test]
    fn plan_by_id_lookup() {
        assert_eq!(plan_by_id("duplex-horizon").unwrap().floors, 1);
        assert!(plan_by_id("chateau").is_none());
    }
}
