use super::types::SaveError;

/// Game objects that can be snapshotted into plain save data and restored from it
///
/// Restoring happens in place on a freshly built object, so resources that
/// are never saved (animations, config-derived tuning) come from that object.
/// Implementations validate the data and return `CorruptedData` instead of
/// applying anything nonsensical.
///
/// ```ignore
/// let data = player.to_save_data();
/// let mut fresh = Player::new(id, &config);
/// fresh.apply_save_data(&data)?;
/// ```
pub trait Saveable {
    type Data;

    fn to_save_data(&self) -> Self::Data;

    fn apply_save_data(&mut self, data: &Self::Data) -> Result<(), SaveError>;
}
