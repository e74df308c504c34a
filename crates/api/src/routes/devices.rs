//! Device registration routes.

use axum::{
    extract::{Path, State},
    Json,
};
use domain::models::device::{normalize_mac, CreateDeviceRequest};
use domain::models::Device;
use persistence::repositories::{DeviceRepository, GroupRepository};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{AppJson, UserAuth};
use crate::middleware::metrics::record_device_registered;

/// List devices in every group visible to the caller.
///
/// GET /device/
pub async fn list_devices(
    State(state): State<AppState>,
    user_auth: UserAuth,
) -> Result<Json<Vec<Device>>, ApiError> {
    let mut tx = state.pool.begin().await?;
    let devices = DeviceRepository::new(&mut tx)
        .list_by_user(&user_auth.user_id)
        .await?;
    tx.commit().await?;

    Ok(Json(devices.into_iter().map(Device::from).collect()))
}

/// Register a device into a group visible to the caller.
///
/// POST /device/
///
/// Unknown and foreign groups both answer 404.
pub async fn create_device(
    State(state): State<AppState>,
    user_auth: UserAuth,
    AppJson(request): AppJson<CreateDeviceRequest>,
) -> Result<Json<Device>, ApiError> {
    request.validate()?;

    let mut tx = state.pool.begin().await?;

    GroupRepository::new(&mut tx)
        .find_visible(&request.group_id, &user_auth.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Group not found".into()))?;

    let device = DeviceRepository::new(&mut tx)
        .add(
            request.name.trim(),
            &normalize_mac(&request.mac),
            request.ip.as_deref().map(str::trim),
            &request.group_id,
        )
        .await?;
    tx.commit().await?;

    record_device_registered();
    info!(
        device_id = %device.id,
        group_id = %device.group_id,
        user_id = %user_auth.user_id,
        "Device registered"
    );

    Ok(Json(device.into()))
}

/// GET /device/:device_id
pub async fn get_device(
    State(state): State<AppState>,
    user_auth: UserAuth,
    Path(device_id): Path<String>,
) -> Result<Json<Device>, ApiError> {
    let mut tx = state.pool.begin().await?;

    let device = DeviceRepository::new(&mut tx)
        .find_by_id(&device_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Device not found".into()))?;

    GroupRepository::new(&mut tx)
        .find_visible(&device.group_id, &user_auth.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Device not found".into()))?;
    tx.commit().await?;

    Ok(Json(device.into()))
}
