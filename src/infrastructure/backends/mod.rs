pub mod offline;
pub mod soilsync;

use crate::domain::models::BackendBox;
use crate::domain::models::BackendName;

pub struct BackendManager {}

impl BackendManager {
    pub fn get(name: BackendName) -> BackendBox {
        match name {
            BackendName::SoilSync => return Box::<soilsync::SoilSync>::default(),
            BackendName::Offline => return Box::<offline::Offline>::default(),
        }
    }
}
