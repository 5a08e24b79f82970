#[derive(Clone, Copy, Debug)]
pub struct MuscleCatalogEntry {
    pub id: &'static str,
    pub muscle: &'static str,
    pub joint: &'static str,
    pub function: &'static str,
}

pub const MUSCLE_CATALOG: &[MuscleCatalogEntry] = &[
    MuscleCatalogEntry {
        id: "biceps-brachii",
        muscle: "M. biceps brachii",
        joint: "Ellebooggewricht (art. cubiti)",
        function: "Flexie van de elleboog (arm buigen)",
    },
    MuscleCatalogEntry {
        id: "deltoideus",
        muscle: "M. deltoideus",
        joint: "Schoudergewricht (art. humeri)",
        function: "Abductie van de arm (zijwaarts heffen)",
    },
    MuscleCatalogEntry {
        id: "quadriceps-femoris",
        muscle: "M. quadriceps femoris",
        joint: "Kniegewricht (art. genus)",
        function: "Extensie van de knie (been strekken)",
    },
    MuscleCatalogEntry {
        id: "gluteus-maximus",
        muscle: "M. gluteus maximus",
        joint: "Heupgewricht (art. coxae)",
        function: "Extensie van de heup (romp oprichten)",
    },
    MuscleCatalogEntry {
        id: "gastrocnemius",
        muscle: "M. gastrocnemius",
        joint: "Enkelgewricht (art. talocruralis)",
        function: "Plantairflexie van de voet (op de tenen staan)",
    },
    MuscleCatalogEntry {
        id: "erector-spinae",
        muscle: "M. erector spinae",
        joint: "Wervelkolom (columna vertebralis)",
        function: "Extensie van de romp (rug strekken)",
    },
];

pub fn muscle_by_id(id: &str) -> Option<&'static MuscleCatalogEntry> {
    let trimmed = id.trim();
    MUSCLE_CATALOG
        .iter()
        .find(|entry| entry.id.eq_ignore_ascii_case(trimmed))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PuzzleRow {
    pub id: String,
    pub muscle: String,
    pub joint: String,
    pub function: String,
}

impl PuzzleRow {
    pub fn from_catalog(entry: &MuscleCatalogEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            muscle: entry.muscle.to_string(),
            joint: entry.joint.to_string(),
            function: entry.function.to_string(),
        }
    }
}

pub fn default_rows() -> Vec<PuzzleRow> {
    MUSCLE_CATALOG.iter().map(PuzzleRow::from_catalog).collect()
}
