use super::{Portfolio, Section, UiStrings};

pub(super) static UI: UiStrings = UiStrings {
    title: "PORTFOLIO DI BIAGIO",
    banner: "Portfolio di Biagio",
    explore: "ESPLORA",
    quit: "QUIT",
    language: "LINGUA",
    goodbye: "ARRIVEDERCI.",
    read_details: "[Z] LEGGI DETTAGLI",
    talk: "[Z] PARLA",
    skip: "[Z] o [X] per SALTARE",
    select: "[↑↓] SELEZIONA",
    confirm: "[Z] CONFERMA",
    close: "[Z] o [ESC] per CHIUDERE",
    save: "[S] SALVA",
    character: "[C] PERSONAGGIO",
    npc_greeting: &[
        "ciao, che ci fai qui?",
        "vuoi per caso scambiarti di posto con me",
        "per interagire in questo portfolio?",
    ],
    npc_options: ["SÌ", "NO"],
    saved: &["* File salvato."],
    journey_continues: &["* Il tuo viaggio continua."],
};

pub(super) static PORTFOLIO: Portfolio = Portfolio {
    profile: Section {
        title: "PROFILE",
        icon: "@",
        summary: "Frontend & Mobile Developer orientato al prodotto, attento a UX e qualità del codice.",
        details: &[
            "Biagio Scaglia",
            "Frontend & Mobile Developer",
            "Product-Oriented | AI & UX/UI Mindset",
            "",
            "Frontend e Mobile Developer con forte orientamento al prodotto,",
            "all'esperienza utente e alla qualità del codice.",
            "",
            "Sviluppo applicazioni web e mobile moderne utilizzando React,",
            "Astro, Flutter e Kotlin, con un approccio pragmatico e orientato",
            "alla risoluzione di problemi reali.",
        ],
    },
    experience: Section {
        title: "ESPERIENZA",
        icon: "#",
        summary: "Frontend Web Developer presso Yumeverse Games. Mobile Application Developer presso sgamapp.",
        details: &[
            "Yumeverse Games · Frontend Web Developer",
            "Dic 2025 – Presente · Da remoto · Remote",
            "",
            "Sviluppo landing page moderne e performanti con Astro,",
            "ottimizzando UX, Core Web Vitals e SEO.",
            "",
            "sgamapp · Mobile Application Developer",
            "Set 2025 – Presente · Bari, Puglia, Italia · Ibrida",
            "",
            "Sviluppo app mobile in Kotlin e React Native per la",
            "piattaforma sgamapp, presentata a JOB&Orienta.",
            "",
            "Demo: sgamapp.vercel.app",
        ],
    },
    skills: Section {
        title: "COMPETENZE",
        icon: "%",
        summary: "TypeScript, Kotlin, Dart, Python, Ruby. React, Astro, Flutter, Laravel. MySQL, PostgreSQL.",
        details: &[
            "Linguaggi di Programmazione:",
            "C, Java, JavaScript, TypeScript, PHP, Python, Ruby, Kotlin, Dart",
            "",
            "Framework & Tecnologie:",
            "Laravel, React, React Native, Astro, Flutter, Tailwind CSS, Express",
            "",
            "Database:",
            "MySQL, SQLite, PostgreSQL",
            "",
            "Altro:",
            "Git, REST API, AI Integration, Web Scraping, SEO, UX/UI Design",
        ],
    },
    projects: Section {
        title: "PROGETTI",
        icon: "*",
        summary: "Ruby Pulse, Monster Hunter Compendium, Nintendo AI, Game Price Tracker, Japan Atlas.",
        details: &[
            "Ruby Pulse – Expense Tracker CLI + Web Dashboard",
            "Tech: Ruby, OOP, Web",
            "GitHub: github.com/biagio-scaglia/ruby-pulse",
            "",
            "Monster Hunter Compendium – Flutter App · Open Source",
            "Tech: Flutter, API, MHW DB",
            "GitHub: github.com/biagio-scaglia/monster-hunter-compendium",
            "",
            "Nintendo AI – AI-Powered App · Flutter + Python",
            "Tech: Flutter, Python, AI, Scraping",
            "GitHub: github.com/biagio-scaglia/Nintendo-AI",
            "",
            "Game Price Tracker – Data Analysis Tool · Python",
            "Tech: Python, CheapShark API, Data Analysis",
            "GitHub: github.com/biagio-scaglia/game-price-tracker",
            "",
            "Japan Atlas – Flutter App · Travel & Culture",
            "Tech: Flutter, Wikipedia API, Travel",
            "GitHub: github.com/biagio-scaglia/japan-atlas",
        ],
    },
    education: Section {
        title: "FORMAZIONE",
        icon: "^",
        summary: "I dettagli sulla formazione sono disponibili su richiesta.",
        details: &[
            "I dettagli sulla formazione sono disponibili su richiesta.",
            "",
            "Scrivimi tramite la card CONTATTI.",
        ],
    },
    contact: Section {
        title: "CONTATTI",
        icon: "~",
        summary: "GitHub, LinkedIn, Instagram ed email. Base a Bari, Italia.",
        details: &[
            "GitHub: github.com/biagio-scaglia",
            "LinkedIn: linkedin.com/in/biagioscaglia",
            "Instagram: instagram.com/biagigiosdevlog",
            "Email: biagioscaglia01@gmail.com",
            "Phone: (+39) 351 315 0134",
            "Location: Bari, Puglia, Italia",
        ],
    },
};
