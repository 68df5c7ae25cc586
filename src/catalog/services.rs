use serde::Serialize;

/// Icon shown next to a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    Building,
    Zap,
    Layers,
    FileCheck,
    Map,
    Wrench,
    Wind,
    Home,
}

/// An engineering or architecture discipline offered by the company.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    /// Short label used in compact lists (footer)
    pub label: &'static str,
    pub short_desc: &'static str,
    pub description: &'static str,
    pub icon: IconKind,
    /// CSS modifier selecting the service's colour scheme
    pub accent: &'static str,
    pub image: &'static str,
    pub features: &'static [&'static str],
}

impl Service {
    #[must_use]
    pub fn href(&self) -> String {
        format!("/services/{}", self.id)
    }
}

static SERVICES: &[Service] = &[
    Service {
        id: "genie-civil",
        title: "Génie Civil",
        label: "Génie Civil",
        short_desc: "Conception, calcul et suivi de vos ouvrages en béton armé, des fondations à la toiture.",
        description: "Notre département génie civil accompagne particuliers, entreprises et institutions dans la conception et la réalisation d'ouvrages durables. Études de sol, dimensionnement des structures, plans d'exécution et suivi de chantier : nous garantissons la solidité et la conformité de chaque construction.",
        icon: IconKind::Building,
        accent: "civil",
        image: "https://images.pexels.com/photos/1117452/pexels-photo-1117452.jpeg?auto=compress&cs=tinysrgb&w=900",
        features: &[
            "Études géotechniques et de sol",
            "Calcul et dimensionnement des structures",
            "Plans d'exécution béton armé",
            "Suivi et contrôle de chantier",
            "Voiries et réseaux divers (VRD)",
        ],
    },
    Service {
        id: "genie-electrique",
        title: "Génie Électrique",
        label: "Génie Électrique",
        short_desc: "Installations électriques résidentielles et industrielles, conformes et sécurisées.",
        description: "Du bilan de puissance à la mise en service, nos ingénieurs électriciens conçoivent et réalisent des installations fiables pour l'habitat, le tertiaire et l'industrie. Nous intégrons les solutions d'énergie solaire pour réduire vos coûts d'exploitation.",
        icon: IconKind::Zap,
        accent: "electric",
        image: "https://images.pexels.com/photos/8961125/pexels-photo-8961125.jpeg?auto=compress&cs=tinysrgb&w=900",
        features: &[
            "Bilan de puissance et schémas unifilaires",
            "Installations basse et moyenne tension",
            "Systèmes solaires photovoltaïques",
            "Éclairage public et industriel",
            "Mise en conformité des installations",
        ],
    },
    Service {
        id: "architecture",
        title: "Architecture",
        label: "Architecture",
        short_desc: "Des plans sur mesure qui allient esthétique, fonctionnalité et maîtrise du budget.",
        description: "Nos architectes traduisent vos idées en espaces de vie et de travail harmonieux. Esquisse, avant-projet, rendus 3D et dossier de consultation des entreprises : chaque étape est pensée pour votre confort et votre budget.",
        icon: IconKind::Layers,
        accent: "architecture",
        image: "https://images.pexels.com/photos/8293670/pexels-photo-8293670.jpeg?auto=compress&cs=tinysrgb&w=900",
        features: &[
            "Esquisses et avant-projets",
            "Plans architecturaux détaillés",
            "Rendus et visites 3D",
            "Aménagement intérieur",
            "Dossier de consultation des entreprises",
        ],
    },
    Service {
        id: "permis-batir",
        title: "Permis de Bâtir",
        label: "Permis de Bâtir",
        short_desc: "Montage et suivi complet de votre dossier de permis de bâtir auprès des mairies.",
        description: "Nous prenons en charge l'ensemble des démarches administratives liées à votre projet : constitution du dossier, plans réglementaires, dépôt et suivi auprès des services compétents jusqu'à l'obtention du permis.",
        icon: IconKind::FileCheck,
        accent: "permit",
        image: "https://images.pexels.com/photos/3860937/pexels-photo-3860937.jpeg?auto=compress&cs=tinysrgb&w=900",
        features: &[
            "Constitution du dossier administratif",
            "Plans réglementaires",
            "Dépôt et suivi en mairie",
            "Certificat d'urbanisme",
        ],
    },
    Service {
        id: "topographie",
        title: "Topographie",
        label: "Topographie",
        short_desc: "Levés, bornage et implantation de précision pour sécuriser votre foncier.",
        description: "Équipés de stations totales et de GPS de précision, nos topographes réalisent levés, bornages, morcellements et implantations d'ouvrages. Des données fiables pour sécuriser vos terrains et vos chantiers.",
        icon: IconKind::Map,
        accent: "survey",
        image: "https://images.pexels.com/photos/30688596/pexels-photo-30688596.jpeg?auto=compress&cs=tinysrgb&w=900",
        features: &[
            "Levés topographiques",
            "Bornage et morcellement",
            "Implantation d'ouvrages",
            "Plans de situation et de masse",
        ],
    },
    Service {
        id: "renovation",
        title: "Rénovation & Réhabilitation",
        label: "Rénovation",
        short_desc: "Redonnez vie à vos bâtiments : diagnostic, renforcement et rénovation complète.",
        description: "Diagnostic structurel, renforcement, reprise des façades et réaménagement intérieur : nous réhabilitons vos bâtiments existants en respectant leur caractère et les normes actuelles.",
        icon: IconKind::Wrench,
        accent: "renovation",
        image: "https://images.pexels.com/photos/9301291/pexels-photo-9301291.jpeg?auto=compress&cs=tinysrgb&w=900",
        features: &[
            "Diagnostic de l'existant",
            "Renforcement de structures",
            "Ravalement de façades",
            "Réaménagement intérieur",
        ],
    },
    Service {
        id: "froid-clim",
        title: "Froid & Climatisation",
        label: "Froid & Clim",
        short_desc: "Études, installation et maintenance de vos systèmes de froid et de climatisation.",
        description: "Nos techniciens dimensionnent et installent des solutions de climatisation et de réfrigération adaptées au climat camerounais, du split résidentiel aux chambres froides industrielles, avec contrats de maintenance.",
        icon: IconKind::Wind,
        accent: "cooling",
        image: "https://images.pexels.com/photos/5298215/pexels-photo-5298215.jpeg?auto=compress&cs=tinysrgb&w=900",
        features: &[
            "Bilan thermique",
            "Climatisation résidentielle et tertiaire",
            "Chambres froides",
            "Maintenance préventive",
        ],
    },
    Service {
        id: "immobilier",
        title: "Immobilier",
        label: "Immobilier",
        short_desc: "Conseil, expertise et accompagnement dans vos projets d'investissement immobilier.",
        description: "Recherche de terrains, expertise immobilière, promotion et accompagnement à l'investissement : nous sécurisons chaque étape de vos opérations immobilières.",
        icon: IconKind::Home,
        accent: "realty",
        image: "https://images.unsplash.com/photo-1504307651254-35680f356dfd?w=900&auto=format&fit=crop",
        features: &[
            "Recherche et sécurisation de terrains",
            "Expertise et évaluation immobilière",
            "Promotion immobilière",
            "Conseil en investissement",
        ],
    },
];

#[must_use]
pub fn services() -> &'static [Service] {
    SERVICES
}

#[must_use]
pub fn service_by_id(id: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.id == id)
}

/// Services other than `id`, in catalog order, at most `limit` of them.
#[must_use]
pub fn related_services(id: &str, limit: usize) -> Vec<&'static Service> {
    SERVICES.iter().filter(|s| s.id != id).take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn service_ids_are_unique() {
        let ids: HashSet<_> = services().iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), services().len());
    }

    #[test]
    fn service_by_id_found() {
        let service = service_by_id("topographie").unwrap();
        assert_eq!(service.title, "Topographie");
        assert_eq!(service.href(), "/services/topographie");
    }

    #[test]
    fn service_by_id_unknown() {
        assert!(service_by_id("plomberie").is_none());
        assert!(service_by_id("").is_none());
    }

    #[test]
    fn related_services_excludes_current() {
        let related = related_services("genie-civil", 3);
        assert_eq!(related.len(), 3);
        assert!(related.iter().all(|s| s.id != "genie-civil"));
        assert_eq!(related[0].id, "genie-electrique");
    }

    #[test]
    fn related_services_for_unknown_id_takes_first() {
        let related = related_services("unknown", 3);
        assert_eq!(related[0].id, "genie-civil");
    }

    #[test]
    fn every_service_lists_features() {
        assert!(services().iter().all(|s| s.features.len() >= 3));
    }
}
