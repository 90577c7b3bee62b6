use tracing::{info, warn};

use squadboard_shared::{Acquisition, DataSupplier, StaticSupplier, ViewMode};

use crate::config::{Config, DataSource};
use crate::remote::RemoteSupplier;

/// Runs one acquisition pass against `supplier` and settles the session state.
pub async fn load<S: DataSupplier>(supplier: &S, view_mode: ViewMode) -> Acquisition {
    let acquisition = Acquisition::new();
    let outcome = supplier.supply().await;

    match &outcome {
        Ok(snapshot) => info!(
            squads = snapshot.squads.len(),
            members = snapshot.members.len(),
            "dashboard data loaded"
        ),
        Err(e) => warn!(error = %e, "failed to load dashboard data"),
    }

    let mut acquisition = acquisition.resolve(outcome);
    if let Some(dashboard) = acquisition.dashboard_mut() {
        dashboard.set_view_mode(view_mode);
    }
    acquisition
}

/// Picks the supplier named by `config` and loads through it.
pub async fn load_from_config(config: &Config) -> Acquisition {
    match config.source {
        DataSource::Static => load(&StaticSupplier, config.view_mode).await,
        DataSource::Remote => match RemoteSupplier::from_config(config) {
            Ok(supplier) => {
                info!(api_url = %supplier.base_url(), "loading dashboard data from API");
                load(&supplier, config.view_mode).await
            }
            Err(e) => {
                warn!(error = %e, "failed to set up API client");
                Acquisition::new().resolve(Err(e))
            }
        },
    }
}
