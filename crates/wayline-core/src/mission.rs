//! Mission description consumed by the document builder.
//!
//! A [`RouteMission`] is built once per request by the caller (after its own
//! validation) and treated as immutable for the duration of a build. All
//! string-valued wire enumerations are closed enums here so every branch in
//! the builder matches exhaustively.

use serde::{Deserialize, Serialize};

/// Route template type. Selects between a plain waypoint path and the
/// area-capture survey templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateType {
    /// Point-to-point waypoint flight
    #[serde(rename = "waypoint")]
    Waypoint,
    /// Orthographic area survey
    #[serde(rename = "mapping2d")]
    Mapping2d,
    /// Oblique photogrammetry survey
    #[serde(rename = "mapping3d")]
    Mapping3d,
    /// Corridor (strip) survey
    #[serde(rename = "mappingStrip")]
    MappingStrip,
}

impl TemplateType {
    pub fn as_str(self) -> &'static str {
        match self {
            TemplateType::Waypoint => "waypoint",
            TemplateType::Mapping2d => "mapping2d",
            TemplateType::Mapping3d => "mapping3d",
            TemplateType::MappingStrip => "mappingStrip",
        }
    }
}

/// Waypoint turn behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnMode {
    /// Early coordinated turn, does not pass over the point
    #[serde(rename = "coordinateTurn")]
    CoordinateTurn,
    /// Straight flight, stop at the point
    #[serde(rename = "toPointAndStopWithDiscontinuityCurvature")]
    ToPointAndStopWithDiscontinuityCurvature,
    /// Curved flight, stop at the point
    #[serde(rename = "toPointAndStopWithContinuityCurvature")]
    ToPointAndStopWithContinuityCurvature,
    /// Curved flight, pass the point without stopping
    #[serde(rename = "toPointAndPassWithContinuityCurvature")]
    ToPointAndPassWithContinuityCurvature,
}

impl TurnMode {
    pub fn as_str(self) -> &'static str {
        match self {
            TurnMode::CoordinateTurn => "coordinateTurn",
            TurnMode::ToPointAndStopWithDiscontinuityCurvature => {
                "toPointAndStopWithDiscontinuityCurvature"
            }
            TurnMode::ToPointAndStopWithContinuityCurvature => {
                "toPointAndStopWithContinuityCurvature"
            }
            TurnMode::ToPointAndPassWithContinuityCurvature => {
                "toPointAndPassWithContinuityCurvature"
            }
        }
    }
}

/// Aircraft heading behavior between waypoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeadingMode {
    /// Nose follows the wayline direction
    #[serde(rename = "followWayline")]
    FollowWayline,
    /// Operator controls the nose manually in flight
    #[serde(rename = "manually")]
    Manually,
    /// Hold the yaw left over from the previous waypoint action
    #[serde(rename = "fixed")]
    Fixed,
    /// Interpolate toward a per-point target angle
    #[serde(rename = "smoothTransition")]
    SmoothTransition,
    /// Point the nose at a point of interest
    #[serde(rename = "towardPOI")]
    TowardPoi,
}

impl HeadingMode {
    pub fn as_str(self) -> &'static str {
        match self {
            HeadingMode::FollowWayline => "followWayline",
            HeadingMode::Manually => "manually",
            HeadingMode::Fixed => "fixed",
            HeadingMode::SmoothTransition => "smoothTransition",
            HeadingMode::TowardPoi => "towardPOI",
        }
    }
}

/// Condition that fires an action group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerType {
    #[serde(rename = "reachPoint")]
    ReachPoint,
    #[serde(rename = "betweenAdjacentPoints")]
    BetweenAdjacentPoints,
    #[serde(rename = "multipleTiming")]
    MultipleTiming,
    #[serde(rename = "multipleDistance")]
    MultipleDistance,
}

impl TriggerType {
    pub fn as_str(self) -> &'static str {
        match self {
            TriggerType::ReachPoint => "reachPoint",
            TriggerType::BetweenAdjacentPoints => "betweenAdjacentPoints",
            TriggerType::MultipleTiming => "multipleTiming",
            TriggerType::MultipleDistance => "multipleDistance",
        }
    }
}

/// What the aircraft does once the route completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FinishAction {
    GoHome,
    NoAction,
    AutoLand,
    GotoFirstWaypoint,
}

impl FinishAction {
    pub fn as_str(self) -> &'static str {
        match self {
            FinishAction::GoHome => "goHome",
            FinishAction::NoAction => "noAction",
            FinishAction::AutoLand => "autoLand",
            FinishAction::GotoFirstWaypoint => "gotoFirstWaypoint",
        }
    }
}

/// Behavior on remote-control signal loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RcLostAction {
    GoBack,
    Landing,
    Hover,
}

impl RcLostAction {
    pub fn as_str(self) -> &'static str {
        match self {
            RcLostAction::GoBack => "goBack",
            RcLostAction::Landing => "landing",
            RcLostAction::Hover => "hover",
        }
    }
}

/// How the gimbal pitch is controlled along a waypoint route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GimbalPitchMode {
    Manual,
    UsePointSetting,
}

impl GimbalPitchMode {
    pub fn as_str(self) -> &'static str {
        match self {
            GimbalPitchMode::Manual => "manual",
            GimbalPitchMode::UsePointSetting => "usePointSetting",
        }
    }
}

/// Survey collection method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CollectionMethod {
    Ortho,
    Inclined,
}

/// Survey sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SensorType {
    Camera,
    Lidar,
}

/// Survey shutter cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShootType {
    Time,
    Distance,
}

impl ShootType {
    pub fn as_str(self) -> &'static str {
        match self {
            ShootType::Time => "time",
            ShootType::Distance => "distance",
        }
    }
}

/// Heading settings, either mission-global or per route point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingSpec {
    pub mode: HeadingMode,
    /// Target yaw angle; only meaningful for [`HeadingMode::SmoothTransition`]
    #[serde(default)]
    pub angle: Option<f64>,
    /// "lon,lat,height" point of interest; only for [`HeadingMode::TowardPoi`]
    #[serde(default)]
    pub poi_point: Option<String>,
}

/// Turn settings, either mission-global or per route point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnSpec {
    pub mode: TurnMode,
    /// Turn intercept distance, used with [`TurnMode::CoordinateTurn`]
    #[serde(default)]
    pub damping_dist: Option<f64>,
    /// Whether the segment hugs a straight line
    #[serde(default)]
    pub use_straight_line: Option<bool>,
}

/// A single action intent attached to a route point (or the mission start).
///
/// The caller is expected to set exactly one directive field per intent;
/// [`classify`](PointAction::classify) resolves the intent into an
/// [`ActionKind`](crate::actions::ActionKind) by a fixed priority order, so
/// an over-specified intent still yields exactly one action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointAction {
    /// Action id within the enclosing group
    #[serde(default)]
    pub action_index: u32,
    /// Hover in place for this many seconds
    #[serde(default)]
    pub hover_time: Option<f64>,
    /// Rotate the aircraft to this yaw angle
    #[serde(default)]
    pub aircraft_heading: Option<f64>,
    /// Take a single photo
    #[serde(default)]
    pub take_photo: Option<bool>,
    /// Rotate the gimbal to this yaw angle (-180..180)
    #[serde(default)]
    pub gimbal_yaw_rotate_angle: Option<f64>,
    /// Rotate the gimbal to this pitch angle (-90..0)
    #[serde(default)]
    pub gimbal_pitch_rotate_angle: Option<f64>,
    /// Zoom the lens to this focal length (mm)
    #[serde(default)]
    pub zoom: Option<f64>,
    /// Take a panoramic shot
    #[serde(default)]
    pub pano_shot: Option<bool>,
    /// Start video recording
    #[serde(default)]
    pub start_record: Option<bool>,
    /// Stop video recording
    #[serde(default)]
    pub stop_record: Option<bool>,
    /// Use the mission-level lens selection for capture actions
    #[serde(default)]
    pub use_global_lens: Option<bool>,
    /// Point-level lens id (wide/zoom/ir/...), used when opting out of the
    /// mission default
    #[serde(default)]
    pub lens: Option<String>,
}

/// A trigger plus an ordered list of action intents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionGroup {
    pub id: u32,
    /// First waypoint index the group applies to (not range-checked here)
    pub start_index: u32,
    /// Last waypoint index the group applies to (not range-checked here)
    pub end_index: u32,
    pub trigger_type: TriggerType,
    /// Trigger period; only meaningful for the timing/distance triggers
    #[serde(default)]
    pub trigger_param: Option<f64>,
    pub actions: Vec<PointAction>,
}

/// One waypoint of the route. Any of the optional settings override the
/// mission-level global for that attribute only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    /// Unique, ordering-significant waypoint index
    pub index: u32,
    pub longitude: f64,
    pub latitude: f64,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub speed: Option<f64>,
    #[serde(default)]
    pub heading: Option<HeadingSpec>,
    #[serde(default)]
    pub turn: Option<TurnSpec>,
    /// Gimbal pitch at this point (-90..0); emitted only when the mission
    /// pitch mode is [`GimbalPitchMode::UsePointSetting`]
    #[serde(default)]
    pub gimbal_pitch_angle: Option<f64>,
    #[serde(default)]
    pub action_groups: Vec<ActionGroup>,
}

/// One vertex of the survey area polygon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaVertex {
    pub longitude: f64,
    pub latitude: f64,
    pub height: f64,
}

/// Area-capture parameters for the survey template types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingParams {
    pub collection_method: CollectionMethod,
    pub sensor: SensorType,
    /// Along-track overlap percentage
    pub overlap_h: u32,
    /// Cross-track overlap percentage
    pub overlap_w: u32,
    #[serde(default)]
    pub elevation_optimize: Option<bool>,
    #[serde(default)]
    pub shoot_type: Option<ShootType>,
    /// Route direction in degrees, e.g. "90" for east-west lines
    #[serde(default)]
    pub direction: Option<String>,
    /// Outward margin around the survey area in meters
    #[serde(default)]
    pub margin: Option<String>,
    /// Survey area polygon vertices; ring closure is the caller's concern
    pub vertices: Vec<AreaVertex>,
}

/// Complete waypoint-mission description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteMission {
    pub template_type: TemplateType,
    /// Drone model enum value (89 = M350 RTK, 60 = M300 RTK, 67 = M30/M30T,
    /// 77 = M3E/M3T/M3M, 91 = M3D/M3TD, 100 = M4D/M4TD)
    pub drone_type: i32,
    #[serde(default)]
    pub sub_drone_type: Option<i32>,
    /// Payload model enum value
    pub payload_type: i32,
    #[serde(default)]
    pub payload_sub_type: Option<i32>,
    /// Payload mount position (0 = nose/main gimbal, 1 = right front, 2 = top)
    pub payload_position: i32,
    /// Default lens selection for capture actions (wide/zoom/ir/...)
    pub image_format: String,
    #[serde(default)]
    pub finish_action: Option<FinishAction>,
    #[serde(default)]
    pub exit_on_rc_lost_action: Option<RcLostAction>,
    /// Takeoff reference point as "lon,lat,height"
    #[serde(default)]
    pub take_off_ref_point: Option<String>,
    /// Global route height in meters
    pub global_height: f64,
    /// Global flight speed in m/s
    pub auto_flight_speed: f64,
    /// Global heading settings; required for the waypoint template
    #[serde(default)]
    pub heading: Option<HeadingSpec>,
    /// Global turn settings; required for the waypoint template
    #[serde(default)]
    pub turn: Option<TurnSpec>,
    /// Gimbal pitch control mode; required for the waypoint template
    #[serde(default)]
    pub gimbal_pitch_mode: Option<GimbalPitchMode>,
    #[serde(default)]
    pub route_points: Vec<RoutePoint>,
    /// Actions executed before the first waypoint
    #[serde(default)]
    pub start_actions: Vec<PointAction>,
    /// Area-capture parameters; required for the survey templates
    #[serde(default)]
    pub mapping: Option<MappingParams>,
}

impl RouteMission {
    /// Smallest and largest waypoint indices, used to derive the boundary
    /// flag. Returns `None` for an empty route.
    pub fn boundary_indices(&self) -> Option<(u32, u32)> {
        let min = self.route_points.iter().map(|p| p.index).min()?;
        let max = self.route_points.iter().map(|p| p.index).max()?;
        Some((min, max))
    }
}
