use serde::Serialize;

use super::ALL;

/// A completed project shown in the portfolio.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub location: &'static str,
    pub year: u16,
    /// Display surface, e.g. "450 m²" or "3 km"
    pub surface: &'static str,
    pub client: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
}

static PROJECTS: &[Project] = &[
    Project {
        id: "villa-bastos",
        title: "Villa Contemporaine à Bastos",
        description: "Conception et construction d'une villa R+1 de standing avec piscine, structure béton armé et toiture terrasse végétalisée.",
        location: "Yaoundé",
        year: 2023,
        surface: "450 m²",
        client: "Particulier",
        image: "https://images.pexels.com/photos/8293670/pexels-photo-8293670.jpeg?auto=compress&cs=tinysrgb&w=800",
        tags: &["Architecture", "Génie Civil", "Résidentiel"],
    },
    Project {
        id: "immeuble-akwa",
        title: "Immeuble R+4 à Akwa",
        description: "Études structurelles et suivi de chantier d'un immeuble mixte commerces et bureaux en plein centre-ville.",
        location: "Douala",
        year: 2022,
        surface: "1 800 m²",
        client: "Société immobilière",
        image: "https://images.pexels.com/photos/1117452/pexels-photo-1117452.jpeg?auto=compress&cs=tinysrgb&w=800",
        tags: &["Génie Civil", "Commercial"],
    },
    Project {
        id: "electrification-mbalmayo",
        title: "Électrification d'un Quartier",
        description: "Extension du réseau basse tension et installation de l'éclairage public solaire sur plus de trois kilomètres de voirie.",
        location: "Mbalmayo",
        year: 2021,
        surface: "3 km",
        client: "Commune de Mbalmayo",
        image: "https://images.pexels.com/photos/8961125/pexels-photo-8961125.jpeg?auto=compress&cs=tinysrgb&w=800",
        tags: &["Génie Électrique", "Public"],
    },
    Project {
        id: "lotissement-kribi",
        title: "Lotissement Balnéaire",
        description: "Levé topographique, bornage et morcellement d'un terrain de cinq hectares en 48 parcelles viabilisées.",
        location: "Kribi",
        year: 2023,
        surface: "5 ha",
        client: "Promoteur privé",
        image: "https://images.pexels.com/photos/30688596/pexels-photo-30688596.jpeg?auto=compress&cs=tinysrgb&w=800",
        tags: &["Topographie", "Immobilier"],
    },
    Project {
        id: "clinique-bafoussam",
        title: "Climatisation d'une Clinique",
        description: "Bilan thermique, installation de climatiseurs centralisés et d'une chambre froide pour la pharmacie.",
        location: "Bafoussam",
        year: 2022,
        surface: "900 m²",
        client: "Clinique privée",
        image: "https://images.pexels.com/photos/5298215/pexels-photo-5298215.jpeg?auto=compress&cs=tinysrgb&w=800",
        tags: &["Froid & Clim", "Santé"],
    },
    Project {
        id: "ecole-garoua",
        title: "Réhabilitation d'un Groupe Scolaire",
        description: "Diagnostic, renforcement des structures et rénovation complète de six salles de classe et des sanitaires.",
        location: "Garoua",
        year: 2020,
        surface: "1 200 m²",
        client: "Ministère de l'Éducation de Base",
        image: "https://images.pexels.com/photos/9301291/pexels-photo-9301291.jpeg?auto=compress&cs=tinysrgb&w=800",
        tags: &["Rénovation", "Génie Civil", "Public"],
    },
    Project {
        id: "duplex-odza",
        title: "Duplex Familial à Odza",
        description: "Plans architecturaux, dossier de permis de bâtir et construction clé en main d'un duplex de quatre chambres.",
        location: "Yaoundé",
        year: 2024,
        surface: "280 m²",
        client: "Particulier",
        image: "https://images.pexels.com/photos/3860937/pexels-photo-3860937.jpeg?auto=compress&cs=tinysrgb&w=800",
        tags: &["Architecture", "Résidentiel"],
    },
    Project {
        id: "entrepot-bonaberi",
        title: "Entrepôt Logistique",
        description: "Conception de la charpente métallique, dallage industriel et installation électrique d'un entrepôt de stockage.",
        location: "Douala",
        year: 2021,
        surface: "2 500 m²",
        client: "Entreprise de logistique",
        image: "https://images.unsplash.com/photo-1504307651254-35680f356dfd?w=800&auto=format&fit=crop",
        tags: &["Génie Civil", "Génie Électrique", "Industriel"],
    },
    Project {
        id: "route-dschang",
        title: "Voirie d'Accès à Dschang",
        description: "Études topographiques et géotechniques, puis suivi des travaux d'une voirie bitumée de 1,2 km avec ouvrages d'assainissement.",
        location: "Dschang",
        year: 2019,
        surface: "1,2 km",
        client: "Commune de Dschang",
        image: "https://images.pexels.com/photos/1117452/pexels-photo-1117452.jpeg?auto=compress&cs=tinysrgb&w=800",
        tags: &["Topographie", "Génie Civil", "Public"],
    },
];

static CATEGORIES: &[&str] = &[
    ALL,
    "Génie Civil",
    "Architecture",
    "Génie Électrique",
    "Topographie",
    "Rénovation",
    "Froid & Clim",
];

#[must_use]
pub fn projects() -> &'static [Project] {
    PROJECTS
}

/// Filter categories, starting with the "all" pseudo category.
#[must_use]
pub fn project_categories() -> &'static [&'static str] {
    CATEGORIES
}

impl Project {
    /// A project belongs to a category when one of its tags contains the
    /// category label. The "all" category matches every project.
    #[must_use]
    pub fn in_category(&self, category: &str) -> bool {
        category == ALL || self.tags.iter().any(|t| t.contains(category))
    }

    /// Case-insensitive match against title or location. The query is
    /// used as typed, surrounding spaces included.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.location.to_lowercase().contains(&query)
    }
}

#[must_use]
pub fn filter_projects(category: &str, query: &str) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|p| p.in_category(category) && p.matches_query(query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn project_ids_are_unique() {
        let ids: HashSet<_> = projects().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), projects().len());
    }

    #[test]
    fn all_category_keeps_everything() {
        assert_eq!(filter_projects(ALL, "").len(), projects().len());
    }

    #[test]
    fn category_matches_tags() {
        let found = filter_projects("Topographie", "");
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|p| p.tags.contains(&"Topographie")));
    }

    #[test]
    fn query_is_case_insensitive_on_title_and_location() {
        let by_location = filter_projects(ALL, "DOUALA");
        assert_eq!(by_location.len(), 2);

        let by_title = filter_projects(ALL, "duplex");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, "duplex-odza");
    }

    #[test]
    fn category_and_query_combine() {
        let found = filter_projects("Génie Civil", "yaoundé");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "villa-bastos");
    }

    #[test]
    fn query_spaces_are_significant() {
        assert!(filter_projects(ALL, " douala ").is_empty());
        assert_eq!(filter_projects(ALL, "à akwa").len(), 1);
        assert!(filter_projects(ALL, "  douala").is_empty());
    }

    #[test]
    fn no_match_is_empty() {
        assert!(filter_projects("Froid & Clim", "Kribi").is_empty());
    }

    #[test]
    fn every_category_has_projects() {
        for category in project_categories() {
            assert!(
                !filter_projects(category, "").is_empty(),
                "category {category} is empty"
            );
        }
    }
}
