//! Entity trait implementation for assembly sessions.
//!
//! The actor's context is the [`OrderRegistry`]: committing a session hands the
//! built pancake to the order before the session is dropped, so a failed hand-over
//! leaves the session open.

use super::error::AssemblyError;
use crate::clients::OrderRegistry;
use crate::framework::ActorEntity;
use crate::model::{Assembly, AssemblyCommit, Ingredient, OrderId};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Assembly {
    type Id = OrderId;
    type Create = ();
    /// Ingredient name, resolved against the catalog once the session is found.
    type Update = String;
    type Delete = AssemblyCommit;
    type Action = ();
    type ActionResult = ();
    type Context = OrderRegistry;
    type Error = AssemblyError;

    fn from_create_params(order_id: OrderId, _params: ()) -> Result<Self, AssemblyError> {
        Ok(Assembly::start(order_id))
    }

    async fn on_update(
        &mut self,
        ingredient_name: String,
        _registry: &OrderRegistry,
    ) -> Result<(), AssemblyError> {
        let ingredient: Ingredient = ingredient_name
            .parse()
            .map_err(|_| AssemblyError::UnknownIngredient(ingredient_name.clone()))?;
        self.builder.add_ingredient(ingredient);
        Ok(())
    }

    async fn on_delete(
        &self,
        commit: AssemblyCommit,
        registry: &OrderRegistry,
    ) -> Result<bool, AssemblyError> {
        registry
            .add_item(self.order_id, self.builder.build(), commit.quantity)
            .await?;
        Ok(true)
    }

    async fn handle_action(
        &mut self,
        _action: (),
        _registry: &OrderRegistry,
    ) -> Result<(), AssemblyError> {
        Ok(())
    }
}
