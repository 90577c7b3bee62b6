use serde::{Deserialize, Serialize};

/// Common shape of every scored entity: a display name plus three unitless scores.
pub trait MetricRecord {
    fn name(&self) -> &str;
    fn performance(&self) -> f64;
    fn efficiency(&self) -> f64;
    fn quality(&self) -> f64;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SquadRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub performance: f64,
    pub efficiency: f64,
    pub quality: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    /// Name of the squad this member belongs to. Not checked against the squad list.
    pub squad: String,
    pub performance: f64,
    pub efficiency: f64,
    pub quality: f64,
}

impl SquadRecord {
    pub fn new(name: &str, performance: f64, efficiency: f64, quality: f64) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            performance,
            efficiency,
            quality,
        }
    }
}

impl MemberRecord {
    pub fn new(name: &str, squad: &str, performance: f64, efficiency: f64, quality: f64) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            squad: squad.to_string(),
            performance,
            efficiency,
            quality,
        }
    }
}

impl MetricRecord for SquadRecord {
    fn name(&self) -> &str {
        &self.name
    }

    fn performance(&self) -> f64 {
        self.performance
    }

    fn efficiency(&self) -> f64 {
        self.efficiency
    }

    fn quality(&self) -> f64 {
        self.quality
    }
}

impl MetricRecord for MemberRecord {
    fn name(&self) -> &str {
        &self.name
    }

    fn performance(&self) -> f64 {
        self.performance
    }

    fn efficiency(&self) -> f64 {
        self.efficiency
    }

    fn quality(&self) -> f64 {
        self.quality
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Squad,
    Member,
}

/// Stable list identity: the record's kind plus its position in the supplied collection.
///
/// Names are display labels only and may repeat, so they are never used as keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityKey {
    pub kind: EntityKind,
    pub index: usize,
}

/// A borrowed record tagged with its concrete kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entity<'a> {
    Squad(&'a SquadRecord),
    Member(&'a MemberRecord),
}

impl<'a> Entity<'a> {
    pub fn kind(self) -> EntityKind {
        match self {
            Self::Squad(_) => EntityKind::Squad,
            Self::Member(_) => EntityKind::Member,
        }
    }

    pub fn record(self) -> &'a dyn MetricRecord {
        match self {
            Self::Squad(squad) => squad,
            Self::Member(member) => member,
        }
    }

    pub fn name(self) -> &'a str {
        match self {
            Self::Squad(squad) => &squad.name,
            Self::Member(member) => &member.name,
        }
    }

    pub fn performance(self) -> f64 {
        self.record().performance()
    }

    pub fn efficiency(self) -> f64 {
        self.record().efficiency()
    }

    pub fn quality(self) -> f64 {
        self.record().quality()
    }

    /// Owning squad name. Only members carry one.
    pub fn squad(self) -> Option<&'a str> {
        match self {
            Self::Squad(_) => None,
            Self::Member(member) => Some(&member.squad),
        }
    }

    /// First character of the name, used as an avatar fallback.
    pub fn initial(self) -> Option<char> {
        self.name().chars().next()
    }
}
