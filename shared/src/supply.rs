use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::acquisition::AcquisitionError;
use crate::record::{MemberRecord, SquadRecord};
use crate::sample;

/// Both collections as delivered by one acquisition pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub squads: Vec<SquadRecord>,
    pub members: Vec<MemberRecord>,
}

/// Source of the squad and member collections.
///
/// Implementations either resolve with both collections or fail as a whole;
/// there is no partially loaded snapshot.
pub trait DataSupplier {
    fn supply(&self) -> impl Future<Output = Result<Snapshot, AcquisitionError>> + Send;
}

/// Serves the built-in sample data. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSupplier;

impl DataSupplier for StaticSupplier {
    async fn supply(&self) -> Result<Snapshot, AcquisitionError> {
        Ok(sample::snapshot())
    }
}
