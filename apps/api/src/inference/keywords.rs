//! Process-wide keyword tables for the inference extractors.
//!
//! Immutable static data, loaded once and never mutated at runtime. Skill
//! and education terms are stored lowercase; matching happens against the
//! lowercased document text.

/// Lines rejected by the single-parse name heuristic (compared
/// case-insensitively against the whole trimmed line).
pub const NAME_HEADER_BLOCKLIST: &[&str] = &[
    "curriculum vitae",
    "resume",
    "cv",
    "personal details",
    "profile",
    "summary",
];

/// Curated technology/skill terms, in detection order.
pub const SKILL_KEYWORDS: &[&str] = &[
    "javascript",
    "react",
    "reactjs",
    "redux",
    "node",
    "nodejs",
    "express",
    "python",
    "django",
    "flask",
    "java",
    "spring",
    "c++",
    "c#",
    "csharp",
    "sql",
    "mysql",
    "postgresql",
    "mongodb",
    "nosql",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "kubectl",
    "html",
    "css",
    "sass",
    "less",
    "bootstrap",
    "tailwind",
    "flutter",
    "dart",
    "android",
    "ios",
    "swift",
    "objective-c",
    "php",
    "laravel",
    "ruby",
    "rails",
    "go",
    "golang",
    "typescript",
    "graphql",
    "rest",
    "redux-saga",
    "rxjs",
    "selenium",
    "jest",
    "mocha",
    "chai",
    "terraform",
    "ansible",
    "linux",
    "bash",
    "powershell",
    "webpack",
    "parcel",
    "vite",
    "react-native",
];

/// Degree and institution terms, English and Arabic merged.
pub const EDUCATION_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "bsc",
    "msc",
    "degree",
    "university",
    "college",
    "faculty",
    "بكالوريوس",
    "ماجستير",
    "دكتوراه",
    "جامعة",
    "كلية",
    "معهد",
];

/// Language names. Arabic carries several surface forms for the same
/// language, so the two halves are not the same length.
pub const LANGUAGE_KEYWORDS: &[&str] = &[
    "arabic",
    "english",
    "french",
    "german",
    "spanish",
    "italian",
    "chinese",
    "japanese",
    "العربية",
    "الانجليزية",
    "إنجليزي",
    "الإنجليزية",
    "الفرنسية",
    "الألمانية",
    "الإسبانية",
    "الإيطالية",
    "الصينية",
    "اليابانية",
];
