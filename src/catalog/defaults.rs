//! Built-in starter catalogs, one per language.
//!
//! These seed the catalog on first launch (or whenever the stored blob is
//! missing or unreadable). Once a user edits the catalog, the stored copy
//! takes over entirely — a later change to these defaults does not merge
//! into an already-persisted catalog.

use crate::settings::Language;

use super::model::{Category, Difficulty, DiyProject};

struct Seed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: Category,
    difficulty: Difficulty,
    steps: &'static [&'static str],
    image_url: &'static str,
}

impl Seed {
    fn build(&self) -> DiyProject {
        DiyProject {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            category: self.category,
            difficulty: self.difficulty,
            steps: self.steps.iter().map(|s| s.to_string()).collect(),
            image_url: self.image_url.to_string(),
        }
    }
}

const IMG_ORGANIZER: &str =
    "https://images.unsplash.com/photo-1591123120675-6f7f1aae0e5b?auto=format&fit=crop&q=80&w=400";
const IMG_LAMP: &str =
    "https://images.unsplash.com/photo-1513506003901-1e6a229e2d15?auto=format&fit=crop&q=80&w=400";
const IMG_SHELF: &str =
    "https://images.unsplash.com/photo-1533090481720-856c6e3c1fdc?auto=format&fit=crop&q=80&w=400";

const SEEDS_AR: &[Seed] = &[
    Seed {
        id: "seed-cardboard-organizer",
        title: "منظم مكتب من الكرتون",
        description: "حوّل صندوق شحن قديم إلى منظم أنيق لمكتبك.",
        category: Category::Cardboard,
        difficulty: Difficulty::Easy,
        steps: &[
            "قصّ الصندوق إلى ثلاثة أقسام بارتفاعات مختلفة.",
            "غلّف كل قسم بورق ملون أو قماش.",
            "ألصق الأقسام ببعضها باستخدام غراء قوي.",
            "اترك المنظم ليجف لمدة ساعة قبل الاستخدام.",
        ],
        image_url: IMG_ORGANIZER,
    },
    Seed {
        id: "seed-paper-lamp",
        title: "مصباح ورقي معلق",
        description: "أباجورة جميلة من ورق الجرائد القديمة.",
        category: Category::Paper,
        difficulty: Difficulty::Medium,
        steps: &[
            "لفّ صفحات الجرائد إلى أنابيب رفيعة.",
            "انسج الأنابيب حول بالون منفوخ.",
            "ادهن الشبكة بالغراء الأبيض واتركها تجف.",
            "افقع البالون وركّب وحدة الإضاءة.",
        ],
        image_url: IMG_LAMP,
    },
    Seed {
        id: "seed-wood-shelf",
        title: "رف حائط من صناديق الخشب",
        description: "رفوف ريفية من صناديق الفاكهة الخشبية.",
        category: Category::Wood,
        difficulty: Difficulty::Hard,
        steps: &[
            "انزع المسامير البارزة ونظّف الصندوق جيداً.",
            "اصقل الخشب بورق الصنفرة.",
            "ادهن الصندوق بطبقة حماية أو لون خشبي.",
            "ثبّت الصندوق على الحائط بمسامير مناسبة.",
            "تأكد من استواء الرف قبل وضع الأغراض.",
        ],
        image_url: IMG_SHELF,
    },
];

const SEEDS_EN: &[Seed] = &[
    Seed {
        id: "seed-cardboard-organizer",
        title: "Cardboard desk organizer",
        description: "Turn an old shipping box into a tidy desk organizer.",
        category: Category::Cardboard,
        difficulty: Difficulty::Easy,
        steps: &[
            "Cut the box into three compartments of different heights.",
            "Wrap each compartment in colored paper or fabric.",
            "Glue the compartments together with strong adhesive.",
            "Let the organizer dry for an hour before use.",
        ],
        image_url: IMG_ORGANIZER,
    },
    Seed {
        id: "seed-paper-lamp",
        title: "Hanging paper lamp",
        description: "A beautiful lampshade woven from old newspapers.",
        category: Category::Paper,
        difficulty: Difficulty::Medium,
        steps: &[
            "Roll newspaper pages into thin tubes.",
            "Weave the tubes around an inflated balloon.",
            "Coat the mesh with white glue and let it dry.",
            "Pop the balloon and fit the light socket.",
        ],
        image_url: IMG_LAMP,
    },
    Seed {
        id: "seed-wood-shelf",
        title: "Crate wall shelf",
        description: "Rustic wall shelving from wooden fruit crates.",
        category: Category::Wood,
        difficulty: Difficulty::Hard,
        steps: &[
            "Pull any protruding nails and clean the crate.",
            "Sand the wood smooth.",
            "Apply a protective finish or wood stain.",
            "Mount the crate on the wall with proper anchors.",
            "Check the shelf is level before loading it.",
        ],
        image_url: IMG_SHELF,
    },
];

const SEEDS_FR: &[Seed] = &[
    Seed {
        id: "seed-cardboard-organizer",
        title: "Organiseur de bureau en carton",
        description: "Transformez un vieux carton d'expédition en organiseur de bureau.",
        category: Category::Cardboard,
        difficulty: Difficulty::Easy,
        steps: &[
            "Découpez le carton en trois compartiments de hauteurs différentes.",
            "Habillez chaque compartiment de papier coloré ou de tissu.",
            "Collez les compartiments ensemble avec une colle forte.",
            "Laissez sécher une heure avant utilisation.",
        ],
        image_url: IMG_ORGANIZER,
    },
    Seed {
        id: "seed-paper-lamp",
        title: "Suspension en papier",
        description: "Un abat-jour tissé à partir de vieux journaux.",
        category: Category::Paper,
        difficulty: Difficulty::Medium,
        steps: &[
            "Roulez les pages de journal en tubes fins.",
            "Tissez les tubes autour d'un ballon gonflé.",
            "Enduisez le maillage de colle blanche et laissez sécher.",
            "Percez le ballon et installez la douille.",
        ],
        image_url: IMG_LAMP,
    },
    Seed {
        id: "seed-wood-shelf",
        title: "Étagère murale en caisses",
        description: "Des étagères rustiques à partir de caisses à fruits en bois.",
        category: Category::Wood,
        difficulty: Difficulty::Hard,
        steps: &[
            "Retirez les clous saillants et nettoyez la caisse.",
            "Poncez le bois pour le lisser.",
            "Appliquez une finition protectrice ou une lasure.",
            "Fixez la caisse au mur avec des chevilles adaptées.",
            "Vérifiez le niveau avant de charger l'étagère.",
        ],
        image_url: IMG_SHELF,
    },
];

const SEEDS_DE: &[Seed] = &[
    Seed {
        id: "seed-cardboard-organizer",
        title: "Schreibtisch-Organizer aus Karton",
        description: "Verwandle einen alten Versandkarton in einen ordentlichen Organizer.",
        category: Category::Cardboard,
        difficulty: Difficulty::Easy,
        steps: &[
            "Schneide den Karton in drei unterschiedlich hohe Fächer.",
            "Beklebe jedes Fach mit buntem Papier oder Stoff.",
            "Klebe die Fächer mit starkem Kleber zusammen.",
            "Lass den Organizer eine Stunde trocknen.",
        ],
        image_url: IMG_ORGANIZER,
    },
    Seed {
        id: "seed-paper-lamp",
        title: "Hängelampe aus Papier",
        description: "Ein geflochtener Lampenschirm aus alten Zeitungen.",
        category: Category::Paper,
        difficulty: Difficulty::Medium,
        steps: &[
            "Rolle Zeitungsseiten zu dünnen Röhren.",
            "Flechte die Röhren um einen aufgeblasenen Ballon.",
            "Bestreiche das Geflecht mit Weißleim und lass es trocknen.",
            "Zersteche den Ballon und montiere die Fassung.",
        ],
        image_url: IMG_LAMP,
    },
    Seed {
        id: "seed-wood-shelf",
        title: "Wandregal aus Holzkisten",
        description: "Rustikale Regale aus alten Obstkisten.",
        category: Category::Wood,
        difficulty: Difficulty::Hard,
        steps: &[
            "Entferne vorstehende Nägel und reinige die Kiste.",
            "Schleife das Holz glatt.",
            "Trage eine Schutzlasur oder Holzfarbe auf.",
            "Befestige die Kiste mit passenden Dübeln an der Wand.",
            "Prüfe vor dem Beladen, ob das Regal gerade hängt.",
        ],
        image_url: IMG_SHELF,
    },
];

/// The language-specific starter catalog.
pub fn default_catalog(lang: Language) -> Vec<DiyProject> {
    let seeds = match lang {
        Language::Ar => SEEDS_AR,
        Language::En => SEEDS_EN,
        Language::Fr => SEEDS_FR,
        Language::De => SEEDS_DE,
    };
    seeds.iter().map(Seed::build).collect()
}
