//! The closed entity catalog.
//!
//! Every occupant of the grid is one of a fixed set of kinds. Each kind has a
//! descriptor carrying its symbol, category, display name, static habitability
//! score and baseline health. Behaviour that differs between kinds is read
//! from the descriptor rather than dispatched per kind.

use serde::Serialize;

/// Marker for the impassable edge of the grid.
pub const BOUNDARY: char = '#';

/// Marker for an unoccupied interior cell.
pub const EMPTY: char = '.';

/// Static score contributed by every flora occupant.
pub const FLORA_SCORE: u32 = 2;

/// Static score contributed by every earth animal occupant.
pub const EARTH_ANIMAL_SCORE: u32 = 5;

/// Flora sub-kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FloraKind {
    /// Ornamental plants and trees.
    Plant,
    /// Food crops.
    Vegetable,
}

/// Occupant category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    /// Space robot, a mobile unit that tends the habitat.
    Robot,
    /// Space rover, a mobile unit that clears terrain.
    Rover,
    /// Rocks and minerals.
    Terrain,
    /// Plants and vegetables.
    Flora(FloraKind),
    /// Livestock brought from Earth.
    EarthAnimal,
    /// Native fauna.
    MartianAnimal,
}

/// Static description of an entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityDescriptor {
    /// Grid symbol, unique across the catalog.
    pub symbol: char,
    /// Category of the kind.
    pub category: Category,
    /// Display name.
    pub name: &'static str,
    /// Points contributed per occupant of this kind.
    pub score: u32,
    /// Starting health; zero if the kind carries no health.
    pub health: i32,
}

/// Every registered entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Entity {
    /// `Z`
    SpaceRobot,
    /// `X`
    SpaceRover,
    /// `H`
    Heebie,
    /// `J`
    Jeebie,
    /// `R`
    Rose,
    /// `L`
    Lily,
    /// `E`
    Eucalyptus,
    /// `P`
    Potato,
    /// `T`
    Tomato,
    /// `O`
    Onion,
    /// `A`
    Apple,
    /// `B`
    Banana,
    /// `C`
    Cow,
    /// `G`
    Goat,
    /// `S`
    Sheep,
    /// `D`
    Dog,
    /// `@`
    Rock,
    /// `*`
    Mineral,
}

const fn descriptor(
    symbol: char,
    category: Category,
    name: &'static str,
    score: u32,
    health: i32,
) -> EntityDescriptor {
    EntityDescriptor {
        symbol,
        category,
        name,
        score,
        health,
    }
}

const PLANT: Category = Category::Flora(FloraKind::Plant);
const VEGETABLE: Category = Category::Flora(FloraKind::Vegetable);

/// Descriptor table, indexed in the same order as [`Entity::ALL`].
static CATALOG: [EntityDescriptor; 18] = [
    descriptor('Z', Category::Robot, "Space Robot", 0, 0),
    descriptor('X', Category::Rover, "Space Rover", 0, 0),
    descriptor('H', Category::MartianAnimal, "Heebie", 0, 15),
    descriptor('J', Category::MartianAnimal, "Jeebie", 0, 15),
    descriptor('R', PLANT, "Rose", FLORA_SCORE, 0),
    descriptor('L', PLANT, "Lily", FLORA_SCORE, 0),
    descriptor('E', PLANT, "Eucalyptus", FLORA_SCORE, 0),
    descriptor('P', VEGETABLE, "Potato", FLORA_SCORE, 0),
    descriptor('T', VEGETABLE, "Tomato", FLORA_SCORE, 0),
    descriptor('O', VEGETABLE, "Onion", FLORA_SCORE, 0),
    descriptor('A', VEGETABLE, "Apple", FLORA_SCORE, 0),
    descriptor('B', VEGETABLE, "Banana", FLORA_SCORE, 0),
    descriptor('C', Category::EarthAnimal, "Cow", EARTH_ANIMAL_SCORE, 0),
    descriptor('G', Category::EarthAnimal, "Goat", EARTH_ANIMAL_SCORE, 0),
    descriptor('S', Category::EarthAnimal, "Sheep", EARTH_ANIMAL_SCORE, 0),
    descriptor('D', Category::EarthAnimal, "Dog", EARTH_ANIMAL_SCORE, 10),
    descriptor('@', Category::Terrain, "Rock", 0, 0),
    descriptor('*', Category::Terrain, "Mineral", 0, 0),
];

impl Entity {
    /// All kinds in catalog order.
    pub const ALL: [Entity; 18] = [
        Entity::SpaceRobot,
        Entity::SpaceRover,
        Entity::Heebie,
        Entity::Jeebie,
        Entity::Rose,
        Entity::Lily,
        Entity::Eucalyptus,
        Entity::Potato,
        Entity::Tomato,
        Entity::Onion,
        Entity::Apple,
        Entity::Banana,
        Entity::Cow,
        Entity::Goat,
        Entity::Sheep,
        Entity::Dog,
        Entity::Rock,
        Entity::Mineral,
    ];

    /// Flora the robot can plant, in planting menu order (keys 1..=8).
    pub const PLANTABLE: [Entity; 8] = [
        Entity::Potato,
        Entity::Tomato,
        Entity::Onion,
        Entity::Apple,
        Entity::Banana,
        Entity::Lily,
        Entity::Rose,
        Entity::Eucalyptus,
    ];

    /// Kinds listed in the habitability status, in display order.
    ///
    /// Units, fauna and rocks are counted but never listed. Onion, apple and
    /// banana follow the older entries.
    pub const STATUS_ORDER: [Entity; 13] = [
        Entity::Potato,
        Entity::Mineral,
        Entity::Sheep,
        Entity::Lily,
        Entity::Eucalyptus,
        Entity::Rose,
        Entity::Cow,
        Entity::Goat,
        Entity::Dog,
        Entity::Tomato,
        Entity::Onion,
        Entity::Apple,
        Entity::Banana,
    ];

    /// Livestock the robot can add, in livestock menu order (keys 1..=4).
    pub const LIVESTOCK: [Entity; 4] = [Entity::Goat, Entity::Sheep, Entity::Cow, Entity::Dog];

    /// Look up the kind drawn with `symbol`.
    ///
    /// Returns `None` for the empty and boundary markers and for any
    /// unregistered character.
    #[must_use]
    pub fn lookup(symbol: char) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|entity| entity.descriptor().symbol == symbol)
    }

    /// The static descriptor for this kind.
    #[must_use]
    pub fn descriptor(self) -> &'static EntityDescriptor {
        &CATALOG[self as usize]
    }

    /// Grid symbol.
    #[must_use]
    pub fn symbol(self) -> char {
        self.descriptor().symbol
    }

    /// Category.
    #[must_use]
    pub fn category(self) -> Category {
        self.descriptor().category
    }

    /// Display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    /// Static habitability score.
    #[must_use]
    pub fn score(self) -> u32 {
        self.descriptor().score
    }

    /// Baseline health.
    #[must_use]
    pub fn baseline_health(self) -> i32 {
        self.descriptor().health
    }

    /// Whether occupants of this kind carry a health value.
    #[must_use]
    pub fn is_health_bearing(self) -> bool {
        self.descriptor().health > 0
    }

    /// Whether this kind is a plant or vegetable.
    #[must_use]
    pub fn is_flora(self) -> bool {
        matches!(self.category(), Category::Flora(_))
    }

    /// Whether this kind is livestock.
    #[must_use]
    pub fn is_earth_animal(self) -> bool {
        self.category() == Category::EarthAnimal
    }

    /// Whether this kind is native fauna.
    #[must_use]
    pub fn is_martian_animal(self) -> bool {
        self.category() == Category::MartianAnimal
    }

    /// Planting menu lookup.
    #[must_use]
    pub fn plantable(key: u8) -> Option<Self> {
        Self::PLANTABLE.get(usize::from(key).checked_sub(1)?).copied()
    }

    /// Livestock menu lookup.
    #[must_use]
    pub fn livestock(key: u8) -> Option<Self> {
        Self::LIVESTOCK.get(usize::from(key).checked_sub(1)?).copied()
    }
}

/// Whether `symbol` may appear inside a grid.
#[must_use]
pub fn is_known_symbol(symbol: char) -> bool {
    symbol == EMPTY || symbol == BOUNDARY || Entity::lookup(symbol).is_some()
}
