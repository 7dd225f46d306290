//! Resolves the type reference carried by duty commands.

use crate::domain::duty::DutyError;
use crate::domain::duty_type::DutyType;
use crate::domain::foundation::DutyTypeId;
use crate::ports::DutyTypeRepository;

/// Which command is asking, for the error message.
#[derive(Debug, Clone, Copy)]
pub(super) enum TypeUse {
    Create,
    Update,
}

impl TypeUse {
    fn verb(self) -> &'static str {
        match self {
            TypeUse::Create => "creating",
            TypeUse::Update => "updating",
        }
    }
}

/// Loads the referenced type or fails with a validation error.
///
/// Missing types are a client mistake, not a not-found on the duty.
pub(super) async fn resolve_type(
    types: &dyn DutyTypeRepository,
    raw_type_id: &str,
    usage: TypeUse,
) -> Result<DutyType, DutyError> {
    let type_id = DutyTypeId::new(raw_type_id).map_err(|_| {
        DutyError::validation(
            "type",
            format!("Type is required for {} a duty", usage.verb()),
        )
    })?;

    types.find_by_id(&type_id).await?.ok_or_else(|| {
        DutyError::validation("type", format!("Type with id {} does not exist", type_id))
    })
}
