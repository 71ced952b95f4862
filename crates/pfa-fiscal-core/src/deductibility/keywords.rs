//! Fixed keyword vocabularies for the deductibility advisor.
//!
//! Lowercase substrings matched case-insensitively against expense titles.
//! Romanian and English terms are mixed because invoices arrive in both.

pub(crate) const MEDICAL_KEYWORDS: &[&str] = &[
    "medical",
    "clinica",
    "cabinet",
    "pacient",
    "tratament",
    "recuperare",
    "reabilitare",
    "kineto",
    "kinetoterap",
    "fizioterap",
    "fiziokinet",
    "terapie manual",
    "manual therapy",
    "dry needling",
    "trigger point",
    "mulligan",
    "maitland",
    "bobath",
    "mckenzie",
    "kinesiotaping",
    "kinesio",
    "taping",
    "posturo",
    "posturologie",
    "tecar",
    "laser terapeutic",
    "electroterapie",
    "ultrasunet",
    "masaj terapeutic",
    "miofascial",
    "fascia",
    "ortopedic",
    "neurologic",
    "sportiv",
    "coloana",
    "lombar",
    "cervical",
    "articulatie",
    "acreditat",
    "credit profesional",
    "formare",
    "specializare",
    "perfectionare",
    // common abbreviations
    "dmi",
];

pub(crate) const IT_TECH_KEYWORDS: &[&str] = &[
    "react",
    "react native",
    "vue",
    "angular",
    "javascript",
    "typescript",
    "html",
    "css",
    "sass",
    "tailwind",
    "node",
    "nodejs",
    "express",
    "nestjs",
    "dotnet",
    ".net",
    "c#",
    "java",
    "spring",
    "php",
    "laravel",
    "python",
    "django",
    "fastapi",
    "android",
    "ios",
    "swift",
    "kotlin",
    "sql",
    "mysql",
    "postgres",
    "mongodb",
    "redis",
    "firebase",
    "firestore",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "ci/cd",
    "devops",
    "git",
    "github",
    "gitlab",
    "bitbucket",
    "jest",
    "cypress",
    "playwright",
    "unit test",
    "e2e",
    "testing",
    "microservices",
    "clean architecture",
    "design patterns",
];

pub(crate) const IT_MANAGEMENT_KEYWORDS: &[&str] = &[
    "agile",
    "scrum",
    "kanban",
    "safe",
    "lean",
    "product owner",
    "product management",
    "project management",
    "pmp",
    "leadership",
    "management",
    "time management",
    "communication",
    "negotiation",
    "roadmap",
    "stakeholder",
    "qa",
    "quality assurance",
    "process improvement",
    "continuous improvement",
];

pub(crate) const GENERIC_BUSINESS_KEYWORDS: &[&str] = &[
    "contabilitate",
    "finante",
    "taxe",
    "fiscal",
    "juridic",
    "legal",
    "contract",
    "gdpr",
    "protectia datelor",
    "marketing",
    "branding",
    "seo",
    "social media",
    "ads",
    "google ads",
    "meta ads",
    "vanzari",
    "sales",
];

pub(crate) const EQUIPMENT_KEYWORDS: &[&str] = &[
    "laptop",
    "notebook",
    "macbook",
    "pc",
    "calculator",
    "monitor",
    "display",
    "imprimanta",
    "printer",
    "scanner",
    "telefon",
    "smartphone",
    "iphone",
    "samsung",
    "router",
    "modem",
    "switch",
    "camera",
    "aparat foto",
    "obiectiv",
    "lens",
    "masa",
    "birou",
    "scaun",
    "chair",
];
