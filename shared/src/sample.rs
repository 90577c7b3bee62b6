//! Built-in sample data served by [`crate::supply::StaticSupplier`].

use crate::record::{MemberRecord, SquadRecord};
use crate::supply::Snapshot;

pub fn squads() -> Vec<SquadRecord> {
    vec![
        SquadRecord::new("Alpha", 85.0, 90.0, 88.0),
        SquadRecord::new("Beta", 78.0, 82.0, 80.0),
        SquadRecord::new("Gamma", 92.0, 88.0, 95.0),
        SquadRecord::new("Delta", 70.0, 75.0, 72.0),
    ]
}

pub fn members() -> Vec<MemberRecord> {
    vec![
        MemberRecord::new("Alice", "Alpha", 88.0, 92.0, 90.0),
        MemberRecord::new("Bob", "Alpha", 82.0, 88.0, 86.0),
        MemberRecord::new("Charlie", "Beta", 76.0, 80.0, 78.0),
        MemberRecord::new("Diana", "Beta", 80.0, 84.0, 82.0),
        MemberRecord::new("Eve", "Gamma", 94.0, 90.0, 96.0),
        MemberRecord::new("Frank", "Gamma", 90.0, 86.0, 94.0),
        MemberRecord::new("Grace", "Delta", 72.0, 76.0, 74.0),
        MemberRecord::new("Henry", "Delta", 68.0, 74.0, 70.0),
    ]
}

pub fn snapshot() -> Snapshot {
    Snapshot {
        squads: squads(),
        members: members(),
    }
}
