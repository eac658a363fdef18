use crate::audit::AuditSink;
use crate::clients::{AssemblyTracker, OrderRegistry};
use crate::config::KitchenConfig;
use std::sync::Arc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// The running kitchen: the order registry, the assembly tracker and their actor tasks.
///
/// # Architecture
///
/// - **Order actor**: owns every live order. Its context is the audit sink.
/// - **Assembly actor**: owns the open pancake sessions. Its context is an
///   [`OrderRegistry`] so that a commit can merge the finished pancake into the order.
///
/// # Example
///
/// ```ignore
/// let system = KitchenSystem::new(&KitchenConfig::default(), Arc::new(TracingAuditSink));
///
/// let order_id = system.registry.create_order(1, 12).await?;
/// system.assembly.start(order_id).await?;
/// system.assembly.add_ingredient(order_id, "dark chocolate").await?;
/// system.assembly.commit(order_id, 2).await?;
///
/// system.shutdown().await?;
/// ```
pub struct KitchenSystem {
    /// Client for the Order actor
    pub registry: OrderRegistry,

    /// Client for the Assembly actor
    pub assembly: AssemblyTracker,

    handles: Vec<JoinHandle<()>>,
}

impl KitchenSystem {
    /// Spawns both actors on the current Tokio runtime.
    pub fn new(config: &KitchenConfig, sink: Arc<dyn AuditSink>) -> Self {
        let (order_actor, registry) = crate::order_actor::new(config.order_mailbox);
        let (assembly_actor, assembly) = crate::assembly_actor::new(config.assembly_mailbox);

        let order_handle = tokio::spawn(order_actor.run(sink));
        // The tracker commits through its own registry handle.
        let assembly_handle = tokio::spawn(assembly_actor.run(registry.clone()));

        info!(
            order_mailbox = config.order_mailbox,
            assembly_mailbox = config.assembly_mailbox,
            "Kitchen started"
        );

        Self {
            registry,
            assembly,
            handles: vec![assembly_handle, order_handle],
        }
    }

    /// Drops the clients and waits for both actors to drain and stop.
    ///
    /// The assembly actor is awaited first: it holds a registry handle, so the
    /// order actor only stops once the assembly actor has.
    ///
    /// Clients cloned out of the system keep their actor alive; drop them first.
    ///
    /// # Errors
    /// The [`JoinError`] of the first actor task that panicked.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down kitchen...");

        drop(self.assembly);
        drop(self.registry);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e);
            }
        }

        info!("Kitchen shutdown complete.");
        Ok(())
    }
}
