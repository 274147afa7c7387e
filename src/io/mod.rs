//! Reading model inputs and writing ENVI-met documents.
//!
//! [`ModelSerializer`] renders the area input file (`.INX`) of a [`ModelInput`],
//! [`write_simulation_file`] the simulation file (`.simx`) running it. Both documents
//! are made of [`Section`]s and written atomically.

pub use self::location::{time_zone_name, Location, LocationError};
pub use self::model_input::{Buildings, Elements2d, ModelInput, NestingGrid, Plants3d};
pub use self::section::{escape_into, render_document, unescape, AttributeMode, Section, ROOT_ELEMENT};
pub use self::serializer::{
    generate, Diagnostics, Generated, GenerationError, ModelSerializer, ObjectCategory, Rendered,
    SkippedObject, DEFAULT_FILE_NAME, INX_EXTENSION, REVISION_DATE_FORMAT,
};
pub use self::simulation::{
    write_simulation_file, SimpleForcing, SimulationConfig, SIMX_EXTENSION,
    SIMX_REVISION_DATE_FORMAT,
};

mod atomic_write;
mod location;
mod model_input;
mod section;
mod serializer;
mod simulation;
