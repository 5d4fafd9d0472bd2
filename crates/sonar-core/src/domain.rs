//! Classification enums for the independently clustered domains.

use std::fmt;

/// Physical state of a natural material.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    /// Solid tiles (ores, stone, ice).
    Solid,
    /// Liquid cells.
    Liquid,
    /// Gas cells.
    Gas,
}

impl Phase {
    /// Catalog category label for materials in this phase.
    pub fn label(self) -> &'static str {
        match self {
            Self::Solid => "Solids",
            Self::Liquid => "Liquids",
            Self::Gas => "Gases",
        }
    }
}

/// A utility network layer. Each kind is clustered independently, so a
/// power wire and a gas pipe sharing a cell never interact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NetworkKind {
    /// Electrical wires.
    Power,
    /// Liquid pipes.
    Liquid,
    /// Gas pipes.
    Gas,
    /// Conveyor rails.
    Conveyor,
    /// Automation wires.
    Automation,
}

impl NetworkKind {
    /// Every network kind, in layer order.
    pub const ALL: [NetworkKind; 5] = [
        Self::Power,
        Self::Liquid,
        Self::Gas,
        Self::Conveyor,
        Self::Automation,
    ];

    /// Number of network kinds.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this kind in [`ALL`](Self::ALL).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Catalog subcategory label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Power => "Power",
            Self::Liquid => "Liquid Pipes",
            Self::Gas => "Gas Pipes",
            Self::Conveyor => "Conveyor Rails",
            Self::Automation => "Automation",
        }
    }
}

impl fmt::Display for NetworkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Work orders placed by dragging a selection box over cells.
///
/// Adjacent cells carrying the same kind form one cluster, even when the
/// cells target different materials.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BoxOrderKind {
    /// Dig out solid tiles.
    Dig,
    /// Mop up liquid puddles.
    Mop,
    /// Sweep loose debris.
    Sweep,
    /// Harvest plants.
    Harvest,
    /// Disinfect germs.
    Disinfect,
    /// Deconstruct buildings.
    Deconstruct,
}

impl BoxOrderKind {
    /// Every box order kind.
    pub const ALL: [BoxOrderKind; 6] = [
        Self::Dig,
        Self::Mop,
        Self::Sweep,
        Self::Harvest,
        Self::Disinfect,
        Self::Deconstruct,
    ];

    /// Catalog subcategory label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dig => "Dig",
            Self::Mop => "Mop",
            Self::Sweep => "Sweep",
            Self::Harvest => "Harvest",
            Self::Disinfect => "Disinfect",
            Self::Deconstruct => "Deconstruct",
        }
    }

    /// Dense key for the order layer (never 0).
    pub fn key(self) -> u64 {
        self as u64 + 1
    }

    /// Inverse of [`key`](Self::key).
    pub fn from_key(key: u64) -> Option<Self> {
        let index = usize::try_from(key.checked_sub(1)?).ok()?;
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for BoxOrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Orders attached to one object rather than painted over cells. These
/// are never clustered: each marker is its own catalog instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IndividualOrderKind {
    /// Attack a creature.
    Attack,
    /// Capture a creature.
    Capture,
    /// Uproot a plant.
    Uproot,
    /// Empty the contents of a pipe segment.
    EmptyPipe,
}

impl IndividualOrderKind {
    /// Catalog subcategory label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Attack => "Attack",
            Self::Capture => "Capture",
            Self::Uproot => "Uproot",
            Self::EmptyPipe => "Empty Pipe",
        }
    }
}

impl fmt::Display for IndividualOrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
