//! Biome axes and the wildcard-matching [`Biome`] triple.

/// Moisture axis. `Any` only appears in reference biomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoistureBiome {
    Dry,
    Moist,
    Wet,
    Water,
    Any,
}

/// Temperature axis. `Any` only appears in reference biomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TemperatureBiome {
    Cold,
    Temperate,
    Tropical,
    Any,
}

/// Altitude axis. `Any` only appears in reference biomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AltitudeBiome {
    Valley,
    Plain,
    Hill,
    Mountain,
    Any,
}

impl MoistureBiome {
    /// Every value a classified cell can carry.
    pub const CONCRETE: [Self; 4] = [Self::Dry, Self::Moist, Self::Wet, Self::Water];

    fn matches(self, other: Self) -> bool {
        self == other || self == Self::Any || other == Self::Any
    }
}

impl TemperatureBiome {
    /// Every value a classified cell can carry.
    pub const CONCRETE: [Self; 3] = [Self::Cold, Self::Temperate, Self::Tropical];

    fn matches(self, other: Self) -> bool {
        self == other || self == Self::Any || other == Self::Any
    }
}

impl AltitudeBiome {
    /// Every value a classified cell can carry, lowest band first.
    pub const CONCRETE: [Self; 4] = [Self::Valley, Self::Plain, Self::Hill, Self::Mountain];

    /// Position of a concrete band in [`AltitudeBiome::CONCRETE`]; `None` for `Any`.
    pub fn band(self) -> Option<usize> {
        Self::CONCRETE.iter().position(|&b| b == self)
    }

    fn matches(self, other: Self) -> bool {
        self == other || self == Self::Any || other == Self::Any
    }
}

/// A biome category triple.
///
/// `==` is wildcard matching: two biomes are equal when, on every axis, the
/// values agree or either side is `Any`. This relation is symmetric but not
/// transitive, so `Biome` deliberately does not implement `Eq` or `Hash`.
#[derive(Clone, Copy, Debug)]
pub struct Biome {
    pub moisture: MoistureBiome,
    pub temperature: TemperatureBiome,
    pub altitude: AltitudeBiome,
}

impl Biome {
    /// Creates a biome from its three axes.
    pub const fn new(
        moisture: MoistureBiome,
        temperature: TemperatureBiome,
        altitude: AltitudeBiome,
    ) -> Self {
        Self {
            moisture,
            temperature,
            altitude,
        }
    }

    /// Returns `true` if no axis is `Any`.
    pub fn is_concrete(&self) -> bool {
        self.moisture != MoistureBiome::Any
            && self.temperature != TemperatureBiome::Any
            && self.altitude != AltitudeBiome::Any
    }

    /// Exact axis-by-axis comparison, treating `Any` as an ordinary value.
    pub fn same_axes(&self, other: &Biome) -> bool {
        self.moisture == other.moisture
            && self.temperature == other.temperature
            && self.altitude == other.altitude
    }
}

impl PartialEq for Biome {
    fn eq(&self, other: &Self) -> bool {
        self.moisture.matches(other.moisture)
            && self.temperature.matches(other.temperature)
            && self.altitude.matches(other.altitude)
    }
}
