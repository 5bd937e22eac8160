use super::{Portfolio, Section, UiStrings};

pub(super) static UI: UiStrings = UiStrings {
    title: "BIAGIO'S PORTFOLIO",
    banner: "Biagio's Portfolio",
    explore: "EXPLORE",
    quit: "QUIT",
    language: "LANGUAGE",
    goodbye: "GOODBYE.",
    read_details: "[Z] READ DETAILS",
    talk: "[Z] TALK",
    skip: "[Z] or [X] to SKIP",
    select: "[↑↓] SELECT",
    confirm: "[Z] CONFIRM",
    close: "[Z] or [ESC] to CLOSE",
    save: "[S] SAVE",
    character: "[C] CHARACTER",
    npc_greeting: &[
        "hey, what are you doing here?",
        "do you want to swap places with me",
        "to interact with this portfolio?",
    ],
    npc_options: ["YES", "NO"],
    saved: &["* File saved."],
    journey_continues: &["* Your journey continues."],
};

pub(super) static PORTFOLIO: Portfolio = Portfolio {
    profile: Section {
        title: "PROFILE",
        icon: "@",
        summary: "Frontend & Mobile Developer with a product mindset, focused on UX and code quality.",
        details: &[
            "Biagio Scaglia",
            "Frontend & Mobile Developer",
            "Product-Oriented | AI & UX/UI Mindset",
            "",
            "Frontend and Mobile Developer with a strong product orientation,",
            "focus on user experience and code quality.",
            "",
            "I develop modern web and mobile applications using React,",
            "Astro, Flutter and Kotlin, with a pragmatic approach focused",
            "on solving real-world problems.",
        ],
    },
    experience: Section {
        title: "EXPERIENCE",
        icon: "#",
        summary: "Frontend Web Developer at Yumeverse Games. Mobile Application Developer at sgamapp.",
        details: &[
            "Yumeverse Games · Frontend Web Developer",
            "Dec 2025 – Present · Remote · Remote",
            "",
            "I develop modern and high-performance landing pages with Astro,",
            "optimizing UX, Core Web Vitals and SEO.",
            "",
            "sgamapp · Mobile Application Developer",
            "Sep 2025 – Present · Bari, Puglia, Italy · Hybrid",
            "",
            "I develop mobile apps in Kotlin and React Native for the",
            "sgamapp platform, presented at JOB&Orienta.",
            "",
            "Demo: sgamapp.vercel.app",
        ],
    },
    skills: Section {
        title: "SKILLS",
        icon: "%",
        summary: "TypeScript, Kotlin, Dart, Python, Ruby. React, Astro, Flutter, Laravel. MySQL, PostgreSQL.",
        details: &[
            "Programming Languages:",
            "C, Java, JavaScript, TypeScript, PHP, Python, Ruby, Kotlin, Dart",
            "",
            "Framework & Technologies:",
            "Laravel, React, React Native, Astro, Flutter, Tailwind CSS, Express",
            "",
            "Database:",
            "MySQL, SQLite, PostgreSQL",
            "",
            "Other:",
            "Git, REST API, AI Integration, Web Scraping, SEO, UX/UI Design",
        ],
    },
    projects: Section {
        title: "PROJECTS",
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
        title: "EDUCATION",
        icon: "^",
        summary: "Education and training details are available on request.",
        details: &[
            "Education and training details are available on request.",
            "",
            "Get in touch through the CONTACT card.",
        ],
    },
    contact: Section {
        title: "CONTACT",
        icon: "~",
        summary: "GitHub, LinkedIn, Instagram and email. Based in Bari, Italy.",
        details: &[
            "GitHub: github.com/biagio-scaglia",
            "LinkedIn: linkedin.com/in/biagioscaglia",
            "Instagram: instagram.com/biagigiosdevlog",
            "Email: biagioscaglia01@gmail.com",
            "Phone: (+39) 351 315 0134",
            "Location: Bari, Puglia, Italy",
        ],
    },
};
