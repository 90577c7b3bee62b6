use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::record::{Entity, EntityKey, EntityKind, MemberRecord, SquadRecord};
use crate::supply::Snapshot;

/// Length of the "Top Performers" list when the caller does not ask for another size.
pub const DEFAULT_TOP_N: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Squad,
    Member,
}

impl ViewMode {
    /// Switch semantics: checked means member view.
    pub fn from_toggle(checked: bool) -> Self {
        if checked { Self::Member } else { Self::Squad }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Squad => Self::Member,
            Self::Member => Self::Squad,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Squad => "Squad",
            Self::Member => "Member",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseViewModeError(pub String);

impl fmt::Display for ParseViewModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown view mode {:?}", self.0)
    }
}

impl std::error::Error for ParseViewModeError {}

impl FromStr for ViewMode {
    type Err = ParseViewModeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "squad" | "squads" => Ok(Self::Squad),
            "member" | "members" => Ok(Self::Member),
            _ => Err(ParseViewModeError(value.to_string())),
        }
    }
}

/// The two tabs of the entity list card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListTab {
    #[default]
    All,
    TopPerformers,
}

/// The collection selected by the current view. Never mixes kinds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Collection<'a> {
    Squads(&'a [SquadRecord]),
    Members(&'a [MemberRecord]),
}

impl<'a> Collection<'a> {
    pub fn kind(self) -> EntityKind {
        match self {
            Self::Squads(_) => EntityKind::Squad,
            Self::Members(_) => EntityKind::Member,
        }
    }

    pub fn len(self) -> usize {
        match self {
            Self::Squads(squads) => squads.len(),
            Self::Members(members) => members.len(),
        }
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    pub fn get(self, index: usize) -> Option<Entity<'a>> {
        match self {
            Self::Squads(squads) => squads.get(index).map(Entity::Squad),
            Self::Members(members) => members.get(index).map(Entity::Member),
        }
    }

    /// Records in supplied order, each paired with its stable key.
    pub fn entries(self) -> Vec<Ranked<'a>> {
        let kind = self.kind();
        (0..self.len())
            .filter_map(|index| {
                self.get(index).map(|entity| Ranked {
                    key: EntityKey { kind, index },
                    entity,
                })
            })
            .collect()
    }
}

/// A record borrowed from the current collection together with its list key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranked<'a> {
    pub key: EntityKey,
    pub entity: Entity<'a>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub key: EntityKey,
    pub label: String,
    pub performance: f64,
    pub efficiency: f64,
    pub quality: f64,
}

/// Holds the squad and member collections and derives every read-only view of them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dashboard {
    squads: Vec<SquadRecord>,
    members: Vec<MemberRecord>,
    view_mode: ViewMode,
}

impl Dashboard {
    pub fn new(squads: Vec<SquadRecord>, members: Vec<MemberRecord>) -> Self {
        Self {
            squads,
            members,
            view_mode: ViewMode::default(),
        }
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self::new(snapshot.squads, snapshot.members)
    }

    pub fn with_view_mode(mut self, mode: ViewMode) -> Self {
        self.view_mode = mode;
        self
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn toggle_view_mode(&mut self) {
        self.view_mode = self.view_mode.toggled();
    }

    pub fn squads(&self) -> &[SquadRecord] {
        &self.squads
    }

    pub fn members(&self) -> &[MemberRecord] {
        &self.members
    }

    pub fn current(&self) -> Collection<'_> {
        match self.view_mode {
            ViewMode::Squad => Collection::Squads(&self.squads),
            ViewMode::Member => Collection::Members(&self.members),
        }
    }

    pub fn count(&self) -> usize {
        self.current().len()
    }

    /// Up to `n` records of the current view, highest performance first.
    ///
    /// Sorts a separate vector of borrows, so the backing collections keep their order.
    /// Equal scores keep their supplied order.
    pub fn top_performers(&self, n: usize) -> Vec<Ranked<'_>> {
        let mut ranked = self.current().entries();
        ranked.sort_by(|a, b| b.entity.performance().total_cmp(&a.entity.performance()));
        ranked.truncate(n);
        ranked
    }

    pub fn chart_series(&self) -> Vec<ChartPoint> {
        self.current()
            .entries()
            .into_iter()
            .map(|Ranked { key, entity }| ChartPoint {
                key,
                label: entity.name().to_string(),
                performance: entity.performance(),
                efficiency: entity.efficiency(),
                quality: entity.quality(),
            })
            .collect()
    }

    /// Entries shown under `tab`. `top_n` bounds the "Top Performers" tab only.
    pub fn list(&self, tab: ListTab, top_n: usize) -> Vec<Ranked<'_>> {
        match tab {
            ListTab::All => self.current().entries(),
            ListTab::TopPerformers => self.top_performers(top_n),
        }
    }
}
