pub mod actions;
pub mod builder;
pub mod codec;
pub mod document;
pub mod error;
pub mod kmz;
pub mod mission;
pub mod survey;

pub use actions::ActionKind;
pub use builder::{build_document, build_template, build_waylines, DocumentKind};
pub use codec::{from_reader, from_xml, to_xml, XML_HEADER};
pub use document::{KmlDocument, KmlFile, KML_NAMESPACE, WPML_NAMESPACE};
pub use error::{Error, Result};
pub use kmz::{
    build_kmz, read_kmz, read_kmz_file, write_kmz, KmzDocuments, TEMPLATE_ENTRY, WAYLINES_ENTRY,
};
pub use mission::{
    ActionGroup, AreaVertex, CollectionMethod, FinishAction, GimbalPitchMode, HeadingMode,
    HeadingSpec, MappingParams, PointAction, RcLostAction, RouteMission, RoutePoint, SensorType,
    ShootType, TemplateType, TriggerType, TurnMode, TurnSpec,
};
