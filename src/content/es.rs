use super::{Portfolio, Section, UiStrings};

pub(super) static UI: UiStrings = UiStrings {
    title: "PORTFOLIO DE BIAGIO",
    banner: "Portfolio de Biagio",
    explore: "EXPLORAR",
    quit: "SALIR",
    language: "IDIOMA",
    goodbye: "ADIÓS.",
    read_details: "[Z] LEER DETALLES",
    talk: "[Z] HABLAR",
    skip: "[Z] o [X] para SALTAR",
    select: "[↑↓] SELECCIONAR",
    confirm: "[Z] CONFIRMAR",
    close: "[Z] o [ESC] para CERRAR",
    save: "[S] GUARDAR",
    character: "[C] PERSONAJE",
    npc_greeting: &[
        "hola, ¿qué haces aquí?",
        "¿quieres cambiar de lugar conmigo",
        "para interactuar con este portfolio?",
    ],
    npc_options: ["SÍ", "NO"],
    saved: &["* Archivo guardado."],
    journey_continues: &["* Tu viaje continúa."],
};

pub(super) static PORTFOLIO: Portfolio = Portfolio {
    profile: Section {
        title: "PERFIL",
        icon: "@",
        summary: "Frontend & Mobile Developer orientado al producto, con foco en UX y calidad del código.",
        details: &[
            "Biagio Scaglia",
            "Frontend & Mobile Developer",
            "Product-Oriented | AI & UX/UI Mindset",
            "",
            "Desarrollador Frontend y Mobile con fuerte orientación al producto,",
            "a la experiencia de usuario y a la calidad del código.",
            "",
            "Desarrollo aplicaciones web y móviles modernas con React,",
            "Astro, Flutter y Kotlin, con un enfoque pragmático orientado",
            "a resolver problemas reales.",
        ],
    },
    experience: Section {
        title: "EXPERIENCIA",
        icon: "#",
        summary: "Frontend Web Developer en Yumeverse Games. Mobile Application Developer en sgamapp.",
        details: &[
            "Yumeverse Games · Frontend Web Developer",
            "Dic 2025 – Presente · Remoto · Remote",
            "",
            "Desarrollo landing pages modernas y rápidas con Astro,",
            "optimizando UX, Core Web Vitals y SEO.",
            "",
            "sgamapp · Mobile Application Developer",
            "Sep 2025 – Presente · Bari, Puglia, Italia · Híbrido",
            "",
            "Desarrollo apps móviles en Kotlin y React Native para la",
            "plataforma sgamapp, presentada en JOB&Orienta.",
            "",
            "Demo: sgamapp.vercel.app",
        ],
    },
    skills: Section {
        title: "HABILIDADES",
        icon: "%",
        summary: "TypeScript, Kotlin, Dart, Python, Ruby. React, Astro, Flutter, Laravel. MySQL, PostgreSQL.",
        details: &[
            "Lenguajes de Programación:",
            "C, Java, JavaScript, TypeScript, PHP, Python, Ruby, Kotlin, Dart",
            "",
            "Frameworks y Tecnologías:",
            "Laravel, React, React Native, Astro, Flutter, Tailwind CSS, Express",
            "",
            "Base de datos:",
            "MySQL, SQLite, PostgreSQL",
            "",
            "Otros:",
            "Git, REST API, AI Integration, Web Scraping, SEO, UX/UI Design",
        ],
    },
    projects: Section {
        title: "PROYECTOS",
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
        title: "EDUCACIÓN",
        icon: "^",
        summary: "Los detalles de formación están disponibles bajo petición.",
        details: &[
            "Los detalles de formación están disponibles bajo petición.",
            "",
            "Escríbeme desde la tarjeta CONTACTO.",
        ],
    },
    contact: Section {
        title: "CONTACTO",
        icon: "~",
        summary: "GitHub, LinkedIn, Instagram y email. Con base en Bari, Italia.",
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
