use anyhow::Context;
use lab_core::admin::{self, AdminSpec};
use serde_json::{Map, Value};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AdminCommands;
use crate::commands::entity::rows_of;
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::context::AppContext;
use crate::output::output;

/// Handle `lab admin`.
pub async fn handle(action: &AdminCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        AdminCommands::Show { entity } => output(spec_for(entity)?, flags.format),
        AdminCommands::List { entity, search } => {
            let spec = spec_for(entity)?;
            let mut rows = rows_of(ctx, spec.entity).await?;
            if spec.entity == "vehicle" {
                fill_vehicle_columns(ctx, &mut rows).await?;
            }
            if let Some(query) = search {
                rows.retain(|row| spec.matches_search(row, query));
            }
            let limit = effective_limit(flags.limit, flags.default_limit);
            let projected = truncate(rows, limit)
                .iter()
                .map(|row| project(spec, row))
                .collect::<Vec<_>>();
            output(&projected, flags.format)
        }
    }
}

fn spec_for(entity: &str) -> anyhow::Result<&'static AdminSpec> {
    admin::lookup(entity).with_context(|| {
        let known = admin::registered()
            .iter()
            .map(|spec| spec.entity)
            .collect::<Vec<_>>();
        format!(
            "'{entity}' has no admin registration; expected one of: {}",
            known.join(", ")
        )
    })
}

fn project(spec: &AdminSpec, row: &Value) -> Value {
    let map = spec
        .project(row)
        .into_iter()
        .map(|(column, value)| (column.to_string(), value))
        .collect::<Map<_, _>>();
    Value::Object(map)
}

/// Vehicles show their owner's name and the derived `car_details` column.
async fn fill_vehicle_columns(ctx: &AppContext, rows: &mut [Value]) -> anyhow::Result<()> {
    for vehicle in ctx.service.list_vehicles().await? {
        let owner = match vehicle.owner_id {
            Some(owner_id) => Value::String(ctx.service.get_owner(owner_id).await?.name),
            None => Value::Null,
        };
        let details = ctx.service.vehicle_car_details(&vehicle).await?;
        let row = rows
            .iter_mut()
            .filter_map(Value::as_object_mut)
            .find(|row| row.get("id").and_then(Value::as_i64) == Some(vehicle.id));
        if let Some(row) = row {
            row.insert("owner".into(), owner);
            row.insert("car_details".into(), Value::String(details));
        }
    }
    Ok(())
}
