//! Company identity, contact details and the "about" page tables.

pub const COMPANY_NAME: &str = "New Generation Engineering BTP MS";
pub const BRAND_TOP: &str = "New Generation";
pub const BRAND_BOTTOM: &str = "Engineering BTP MS";
pub const FOUNDED: u16 = 2016;

pub const PHONE_PRIMARY: Phone = Phone {
    display: "+237 654 21 08 42",
    short: "654 21 08 42",
    tel: "tel:+237654210842",
};
pub const PHONE_SECONDARY: Phone = Phone {
    display: "+237 671 54 79 84",
    short: "671 54 79 84",
    tel: "tel:+237671547984",
};
pub const EMAIL: &str = "generationnouvelle@gmail.com";
pub const EMAIL_HREF: &str = "mailto:generationnouvelle@gmail.com";
pub const WHATSAPP_URL: &str = "https://wa.me/237654210842";
pub const ADDRESS: &str = "Yaoundé, Cameroun";
pub const OPENING_HOURS: &str = "Lun – Sam : 7h30 – 18h00";
pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d127672.07685516537!2d11.43845087!3d3.87019505!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x108bcfe4e1c2e7d3%3A0x6b61b63e3cf8a3d0!2sYaound%C3%A9%2C%20Cameroon!5e0!3m2!1sfr!2sfr!4v1700000000000!5m2!1sfr!2sfr";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phone {
    pub display: &'static str,
    pub short: &'static str,
    pub tel: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub initials: &'static str,
    /// CSS modifier for the avatar colour
    pub tone: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompanyValue {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub year: u16,
    pub title: &'static str,
    pub description: &'static str,
}

impl Milestone {
    /// Two-digit year shown in the timeline bullet.
    #[must_use]
    pub fn short_year(&self) -> String {
        format!("{:02}", self.year % 100)
    }
}

pub static HOME_STATS: &[Stat] = &[
    Stat { value: "150+", label: "Clients Satisfaits" },
    Stat { value: "200+", label: "Projets Réalisés" },
    Stat { value: "8+", label: "Années d'Expérience" },
    Stat { value: "8", label: "Domaines d'Expertise" },
];

pub static PORTFOLIO_STATS: &[Stat] = &[
    Stat { value: "200+", label: "Projets" },
    Stat { value: "10+", label: "Villes" },
    Stat { value: "8+", label: "Secteurs" },
];

pub static ABOUT_STATS: &[Stat] = &[
    Stat { value: "2016", label: "Fondée en" },
    Stat { value: "8+", label: "Experts" },
    Stat { value: "200+", label: "Projets" },
];

pub static TEAM: &[TeamMember] = &[
    TeamMember {
        name: "DJOMO Aubin",
        role: "Directeur Général & Fondateur",
        description: "Ingénieur en génie civil, visionnaire et fondateur de l'entreprise depuis 2016.",
        initials: "DA",
        tone: "forest",
    },
    TeamMember {
        name: "Ingénieur Génie Civil",
        role: "Responsable Technique GC",
        description: "Expert en conception structurelle et supervision de projets de construction.",
        initials: "GC",
        tone: "leaf",
    },
    TeamMember {
        name: "Ingénieur Électricien",
        role: "Chef de Projet Génie Élec",
        description: "Spécialiste des installations électriques industrielles et résidentielles.",
        initials: "GE",
        tone: "moss",
    },
    TeamMember {
        name: "Architecte Principal",
        role: "Responsable Architecture",
        description: "Architecte diplômé, concepteur de projets résidentiels et commerciaux.",
        initials: "AR",
        tone: "purple",
    },
    TeamMember {
        name: "Ingénieur Topographe",
        role: "Chef de Projet Topo",
        description: "Expert en levés topographiques, bornage et géolocalisation de précision.",
        initials: "TO",
        tone: "teal",
    },
    TeamMember {
        name: "DRH",
        role: "Directrice des Ressources Humaines",
        description: "Pilote la politique RH et le développement des talents de l'entreprise.",
        initials: "RH",
        tone: "pink",
    },
    TeamMember {
        name: "Responsable Communication",
        role: "Chargée de Communication",
        description: "Gère la stratégie de communication et le marketing digital de l'entreprise.",
        initials: "CO",
        tone: "amber",
    },
    TeamMember {
        name: "Assistante de Direction",
        role: "Assistante de Direction",
        description: "Coordinatrice administrative et commerciale de la direction générale.",
        initials: "AD",
        tone: "red",
    },
];

pub static VALUES: &[CompanyValue] = &[
    CompanyValue {
        title: "Excellence Technique",
        description: "Nous appliquons les plus hauts standards de qualité dans chaque mission.",
    },
    CompanyValue {
        title: "Écoute Client",
        description: "Vos besoins sont au cœur de notre démarche. Nous adaptons nos solutions à votre contexte.",
    },
    CompanyValue {
        title: "Esprit d'Équipe",
        description: "Une équipe soudée et pluridisciplinaire au service de vos projets.",
    },
    CompanyValue {
        title: "Engagement",
        description: "Nous respectons nos engagements en termes de délais, de qualité et de budget.",
    },
];

pub static MILESTONES: &[Milestone] = &[
    Milestone {
        year: 2016,
        title: "Fondation",
        description: "Création de New Generation Engineering BTP MS par M. DJOMO Aubin.",
    },
    Milestone {
        year: 2017,
        title: "Premiers Projets",
        description: "Ouverture de la direction générale et recrutement des premiers ingénieurs qualifiés.",
    },
    Milestone {
        year: 2019,
        title: "Expansion Services",
        description: "Extension des services : topographie, froid & clim, immobilier.",
    },
    Milestone {
        year: 2021,
        title: "100+ Projets",
        description: "Franchissement du cap des 100 projets réalisés sur le territoire camerounais.",
    },
    Milestone {
        year: 2023,
        title: "Croissance",
        description: "Plus de 150 clients satisfaits et des projets dans toutes les régions du Cameroun.",
    },
    Milestone {
        year: 2024,
        title: "Digitalisation",
        description: "Lancement du site web et de la plateforme digitale pour mieux servir nos clients.",
    },
];

/// Cities listed under "Zones d'Intervention"; the last entry is highlighted.
pub static INTERVENTION_ZONES: &[&str] = &[
    "Yaoundé",
    "Douala",
    "Bafoussam",
    "Bamenda",
    "Garoua",
    "Maroua",
    "Ngaoundéré",
    "Bertoua",
    "Ebolowa",
    "Kribi",
    "Limbé",
    "Dschang",
    "Mbalmayo",
    "Edéa",
    "Et Partout au Cameroun",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn milestones_are_chronological() {
        assert!(MILESTONES.windows(2).all(|w| w[0].year < w[1].year));
        assert_eq!(MILESTONES[0].year, FOUNDED);
    }

    #[test]
    fn milestone_short_year() {
        assert_eq!(MILESTONES[0].short_year(), "16");
    }

    #[test]
    fn team_initials_are_two_letters() {
        assert!(TEAM.iter().all(|m| m.initials.chars().count() == 2));
    }
}
