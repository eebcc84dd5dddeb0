//! Serde-annotated structs that mirror the KML/WPML document structure.
//!
//! These types are the single schema table for the XML codec: the same
//! definitions drive serialization and deserialization, so the two
//! directions cannot drift apart. Element names (including the `wpml:`
//! namespace prefix) come from the serde renames, field order from the
//! struct declaration order, and absent optional fields are omitted
//! entirely. The deserializer sees prefix-stripped local names, so every
//! prefixed field also carries its local name as an alias. Unknown elements in the input are ignored, and decoding can
//! only ever instantiate the types declared here.
//!
//! All leaf values are wire-ready strings; the document builder is
//! responsible for formatting.

use serde::{Deserialize, Serialize};

pub const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";
pub const WPML_NAMESPACE: &str = "http://www.dji.com/wpmz/1.0.2";

/// Root `<kml>` element of either container document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KmlFile {
    #[serde(rename = "@xmlns", default)]
    pub xmlns: String,
    #[serde(rename = "@xmlns:wpml", alias = "@wpml", default)]
    pub xmlns_wpml: String,
    #[serde(rename = "Document", default)]
    pub document: KmlDocument,
}

impl KmlFile {
    pub fn new(document: KmlDocument) -> Self {
        Self {
            xmlns: KML_NAMESPACE.to_string(),
            xmlns_wpml: WPML_NAMESPACE.to_string(),
            document,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KmlDocument {
    /// Authoring document only
    #[serde(rename = "wpml:author", alias = "author", skip_serializing_if = "Option::is_none", default)]
    pub author: Option<String>,
    /// Epoch milliseconds; authoring document only
    #[serde(rename = "wpml:createTime", alias = "createTime", skip_serializing_if = "Option::is_none", default)]
    pub create_time: Option<String>,
    /// Epoch milliseconds; authoring document only
    #[serde(rename = "wpml:updateTime", alias = "updateTime", skip_serializing_if = "Option::is_none", default)]
    pub update_time: Option<String>,
    #[serde(rename = "wpml:missionConfig", alias = "missionConfig", default)]
    pub mission_config: KmlMissionConfig,
    #[serde(rename = "Folder", default)]
    pub folder: KmlFolder,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KmlMissionConfig {
    #[serde(rename = "wpml:flyToWaylineMode", alias = "flyToWaylineMode", skip_serializing_if = "Option::is_none", default)]
    pub fly_to_wayline_mode: Option<String>,
    #[serde(rename = "wpml:finishAction", alias = "finishAction", skip_serializing_if = "Option::is_none", default)]
    pub finish_action: Option<String>,
    #[serde(rename = "wpml:exitOnRCLost", alias = "exitOnRCLost", skip_serializing_if = "Option::is_none", default)]
    pub exit_on_rc_lost: Option<String>,
    #[serde(
        rename = "wpml:executeRCLostAction", alias = "executeRCLostAction",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub execute_rc_lost_action: Option<String>,
    #[serde(
        rename = "wpml:takeOffSecurityHeight", alias = "takeOffSecurityHeight",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub take_off_security_height: Option<String>,
    #[serde(
        rename = "wpml:globalTransitionalSpeed", alias = "globalTransitionalSpeed",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub global_transitional_speed: Option<String>,
    #[serde(rename = "wpml:globalRTHHeight", alias = "globalRTHHeight", skip_serializing_if = "Option::is_none", default)]
    pub global_rth_height: Option<String>,
    #[serde(rename = "wpml:takeOffRefPoint", alias = "takeOffRefPoint", skip_serializing_if = "Option::is_none", default)]
    pub take_off_ref_point: Option<String>,
    #[serde(rename = "wpml:droneInfo", alias = "droneInfo", default)]
    pub drone_info: KmlDroneInfo,
    #[serde(rename = "wpml:payloadInfo", alias = "payloadInfo", default)]
    pub payload_info: KmlPayloadInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KmlDroneInfo {
    #[serde(rename = "wpml:droneEnumValue", alias = "droneEnumValue", skip_serializing_if = "Option::is_none", default)]
    pub drone_enum_value: Option<String>,
    #[serde(
        rename = "wpml:droneSubEnumValue", alias = "droneSubEnumValue",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub drone_sub_enum_value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KmlPayloadInfo {
    #[serde(rename = "wpml:payloadEnumValue", alias = "payloadEnumValue", skip_serializing_if = "Option::is_none", default)]
    pub payload_enum_value: Option<String>,
    #[serde(
        rename = "wpml:payloadSubEnumValue", alias = "payloadSubEnumValue",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub payload_sub_enum_value: Option<String>,
    #[serde(
        rename = "wpml:payloadPositionIndex", alias = "payloadPositionIndex",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub payload_position_index: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KmlFolder {
    #[serde(rename = "wpml:templateId", alias = "templateId", skip_serializing_if = "Option::is_none", default)]
    pub template_id: Option<String>,
    /// Authoring document only
    #[serde(rename = "wpml:templateType", alias = "templateType", skip_serializing_if = "Option::is_none", default)]
    pub template_type: Option<String>,
    /// Execution document only
    #[serde(rename = "wpml:waylineId", alias = "waylineId", skip_serializing_if = "Option::is_none", default)]
    pub wayline_id: Option<String>,
    #[serde(rename = "wpml:autoFlightSpeed", alias = "autoFlightSpeed", skip_serializing_if = "Option::is_none", default)]
    pub auto_flight_speed: Option<String>,
    /// Execution document only
    #[serde(
        rename = "wpml:executeHeightMode", alias = "executeHeightMode",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub execute_height_mode: Option<String>,
    /// Authoring document only
    #[serde(
        rename = "wpml:waylineCoordinateSysParam", alias = "waylineCoordinateSysParam",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub wayline_coordinate_sys_param: Option<KmlWaylineCoordinateSysParam>,
    /// Authoring document only
    #[serde(rename = "wpml:payloadParam", alias = "payloadParam", skip_serializing_if = "Option::is_none", default)]
    pub payload_param: Option<KmlPayloadParam>,
    #[serde(
        rename = "wpml:globalWaypointTurnMode", alias = "globalWaypointTurnMode",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub global_waypoint_turn_mode: Option<String>,
    #[serde(
        rename = "wpml:globalUseStraightLine", alias = "globalUseStraightLine",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub global_use_straight_line: Option<String>,
    #[serde(rename = "wpml:gimbalPitchMode", alias = "gimbalPitchMode", skip_serializing_if = "Option::is_none", default)]
    pub gimbal_pitch_mode: Option<String>,
    #[serde(rename = "wpml:globalHeight", alias = "globalHeight", skip_serializing_if = "Option::is_none", default)]
    pub global_height: Option<String>,
    #[serde(
        rename = "wpml:globalWaypointHeadingParam", alias = "globalWaypointHeadingParam",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub global_waypoint_heading_param: Option<KmlWaypointHeadingParam>,
    /// Execution document only; present iff the mission has start actions
    #[serde(rename = "wpml:startActionGroup", alias = "startActionGroup", skip_serializing_if = "Option::is_none", default)]
    pub start_action_group: Option<KmlActionGroup>,
    #[serde(rename = "Placemark", skip_serializing_if = "Vec::is_empty", default)]
    pub placemarks: Vec<KmlPlacemark>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KmlWaylineCoordinateSysParam {
    #[serde(rename = "wpml:coordinateMode", alias = "coordinateMode", skip_serializing_if = "Option::is_none", default)]
    pub coordinate_mode: Option<String>,
    #[serde(rename = "wpml:heightMode", alias = "heightMode", skip_serializing_if = "Option::is_none", default)]
    pub height_mode: Option<String>,
    #[serde(rename = "wpml:positioningType", alias = "positioningType", skip_serializing_if = "Option::is_none", default)]
    pub positioning_type: Option<String>,
    /// Survey templates only
    #[serde(
        rename = "wpml:globalShootHeight", alias = "globalShootHeight",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub global_shoot_height: Option<String>,
    /// Survey templates only
    #[serde(
        rename = "wpml:surfaceFollowModeEnable", alias = "surfaceFollowModeEnable",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub surface_follow_mode_enable: Option<String>,
    /// Survey templates only
    #[serde(
        rename = "wpml:surfaceRelativeHeight", alias = "surfaceRelativeHeight",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub surface_relative_height: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KmlPayloadParam {
    #[serde(
        rename = "wpml:payloadPositionIndex", alias = "payloadPositionIndex",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub payload_position_index: Option<String>,
    #[serde(rename = "wpml:focusMode", alias = "focusMode", skip_serializing_if = "Option::is_none", default)]
    pub focus_mode: Option<String>,
    #[serde(rename = "wpml:meteringMode", alias = "meteringMode", skip_serializing_if = "Option::is_none", default)]
    pub metering_mode: Option<String>,
    #[serde(rename = "wpml:dewarpingEnable", alias = "dewarpingEnable", skip_serializing_if = "Option::is_none", default)]
    pub dewarping_enable: Option<String>,
    #[serde(rename = "wpml:returnMode", alias = "returnMode", skip_serializing_if = "Option::is_none", default)]
    pub return_mode: Option<String>,
    #[serde(rename = "wpml:samplingRate", alias = "samplingRate", skip_serializing_if = "Option::is_none", default)]
    pub sampling_rate: Option<String>,
    #[serde(rename = "wpml:scanningMode", alias = "scanningMode", skip_serializing_if = "Option::is_none", default)]
    pub scanning_mode: Option<String>,
    #[serde(
        rename = "wpml:modelColoringEnable", alias = "modelColoringEnable",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub model_coloring_enable: Option<String>,
    #[serde(rename = "wpml:imageFormat", alias = "imageFormat", skip_serializing_if = "Option::is_none", default)]
    pub image_format: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KmlWaypointHeadingParam {
    #[serde(
        rename = "wpml:waypointHeadingMode", alias = "waypointHeadingMode",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub waypoint_heading_mode: Option<String>,
    #[serde(
        rename = "wpml:waypointHeadingAngle", alias = "waypointHeadingAngle",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub waypoint_heading_angle: Option<String>,
    #[serde(rename = "wpml:waypointPoiPoint", alias = "waypointPoiPoint", skip_serializing_if = "Option::is_none", default)]
    pub waypoint_poi_point: Option<String>,
    #[serde(
        rename = "wpml:waypointHeadingPathMode", alias = "waypointHeadingPathMode",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub waypoint_heading_path_mode: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KmlWaypointTurnParam {
    #[serde(rename = "wpml:waypointTurnMode", alias = "waypointTurnMode", skip_serializing_if = "Option::is_none", default)]
    pub waypoint_turn_mode: Option<String>,
    #[serde(
        rename = "wpml:waypointTurnDampingDist", alias = "waypointTurnDampingDist",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub waypoint_turn_damping_dist: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KmlPoint {
    #[serde(rename = "coordinates", default)]
    pub coordinates: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KmlPlacemark {
    #[serde(rename = "wpml:isRisky", alias = "isRisky", skip_serializing_if = "Option::is_none", default)]
    pub is_risky: Option<String>,
    /// Waypoint coordinate; absent on the survey-area placemark
    #[serde(rename = "Point", skip_serializing_if = "Option::is_none", default)]
    pub point: Option<KmlPoint>,
    #[serde(rename = "wpml:index", alias = "index", skip_serializing_if = "Option::is_none", default)]
    pub index: Option<String>,
    /// Authoring document
    #[serde(rename = "wpml:ellipsoidHeight", alias = "ellipsoidHeight", skip_serializing_if = "Option::is_none", default)]
    pub ellipsoid_height: Option<String>,
    /// Authoring document
    #[serde(rename = "wpml:height", alias = "height", skip_serializing_if = "Option::is_none", default)]
    pub height: Option<String>,
    /// Execution document; always the resolved height
    #[serde(rename = "wpml:executeHeight", alias = "executeHeight", skip_serializing_if = "Option::is_none", default)]
    pub execute_height: Option<String>,
    #[serde(rename = "wpml:useGlobalHeight", alias = "useGlobalHeight", skip_serializing_if = "Option::is_none", default)]
    pub use_global_height: Option<String>,
    #[serde(rename = "wpml:useGlobalSpeed", alias = "useGlobalSpeed", skip_serializing_if = "Option::is_none", default)]
    pub use_global_speed: Option<String>,
    #[serde(rename = "wpml:waypointSpeed", alias = "waypointSpeed", skip_serializing_if = "Option::is_none", default)]
    pub waypoint_speed: Option<String>,
    #[serde(
        rename = "wpml:useGlobalHeadingParam", alias = "useGlobalHeadingParam",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub use_global_heading_param: Option<String>,
    #[serde(
        rename = "wpml:waypointHeadingParam", alias = "waypointHeadingParam",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub waypoint_heading_param: Option<KmlWaypointHeadingParam>,
    #[serde(
        rename = "wpml:useGlobalTurnParam", alias = "useGlobalTurnParam",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub use_global_turn_param: Option<String>,
    #[serde(rename = "wpml:waypointTurnParam", alias = "waypointTurnParam", skip_serializing_if = "Option::is_none", default)]
    pub waypoint_turn_param: Option<KmlWaypointTurnParam>,
    #[serde(rename = "wpml:useStraightLine", alias = "useStraightLine", skip_serializing_if = "Option::is_none", default)]
    pub use_straight_line: Option<String>,
    #[serde(rename = "wpml:gimbalPitchAngle", alias = "gimbalPitchAngle", skip_serializing_if = "Option::is_none", default)]
    pub gimbal_pitch_angle: Option<String>,
    /// Implicit collection: repeated child elements, no wrapper
    #[serde(rename = "wpml:actionGroup", alias = "actionGroup", skip_serializing_if = "Vec::is_empty", default)]
    pub action_groups: Vec<KmlActionGroup>,
    // Survey-area placemark fields.
    #[serde(rename = "wpml:caliFlightEnable", alias = "caliFlightEnable", skip_serializing_if = "Option::is_none", default)]
    pub cali_flight_enable: Option<String>,
    #[serde(
        rename = "wpml:elevationOptimizeEnable", alias = "elevationOptimizeEnable",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub elevation_optimize_enable: Option<String>,
    #[serde(
        rename = "wpml:smartObliqueEnable", alias = "smartObliqueEnable",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub smart_oblique_enable: Option<String>,
    #[serde(rename = "wpml:shootType", alias = "shootType", skip_serializing_if = "Option::is_none", default)]
    pub shoot_type: Option<String>,
    #[serde(rename = "wpml:direction", alias = "direction", skip_serializing_if = "Option::is_none", default)]
    pub direction: Option<String>,
    #[serde(rename = "wpml:margin", alias = "margin", skip_serializing_if = "Option::is_none", default)]
    pub margin: Option<String>,
    #[serde(rename = "wpml:overlap", alias = "overlap", skip_serializing_if = "Option::is_none", default)]
    pub overlap: Option<KmlOverlap>,
    #[serde(
        rename = "wpml:facadeWaylineEnable", alias = "facadeWaylineEnable",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub facade_wayline_enable: Option<String>,
    #[serde(rename = "Polygon", skip_serializing_if = "Option::is_none", default)]
    pub polygon: Option<KmlPolygon>,
}

/// Overlap plan for the survey templates. All four method x sensor pairs are
/// populated with the same values (see DESIGN.md).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KmlOverlap {
    #[serde(
        rename = "wpml:orthoCameraOverlapH", alias = "orthoCameraOverlapH",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub ortho_camera_overlap_h: Option<String>,
    #[serde(
        rename = "wpml:orthoCameraOverlapW", alias = "orthoCameraOverlapW",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub ortho_camera_overlap_w: Option<String>,
    #[serde(
        rename = "wpml:inclinedCameraOverlapH", alias = "inclinedCameraOverlapH",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub inclined_camera_overlap_h: Option<String>,
    #[serde(
        rename = "wpml:inclinedCameraOverlapW", alias = "inclinedCameraOverlapW",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub inclined_camera_overlap_w: Option<String>,
    #[serde(
        rename = "wpml:orthoLidarOverlapH", alias = "orthoLidarOverlapH",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub ortho_lidar_overlap_h: Option<String>,
    #[serde(
        rename = "wpml:orthoLidarOverlapW", alias = "orthoLidarOverlapW",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub ortho_lidar_overlap_w: Option<String>,
    #[serde(
        rename = "wpml:inclinedLidarOverlapH", alias = "inclinedLidarOverlapH",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub inclined_lidar_overlap_h: Option<String>,
    #[serde(
        rename = "wpml:inclinedLidarOverlapW", alias = "inclinedLidarOverlapW",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub inclined_lidar_overlap_w: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KmlPolygon {
    #[serde(rename = "outerBoundaryIs", default)]
    pub outer_boundary_is: KmlOuterBoundaryIs,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KmlOuterBoundaryIs {
    #[serde(rename = "LinearRing", default)]
    pub linear_ring: KmlLinearRing,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KmlLinearRing {
    #[serde(rename = "coordinates", default)]
    pub coordinates: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KmlActionGroup {
    #[serde(rename = "wpml:actionGroupId", alias = "actionGroupId", skip_serializing_if = "Option::is_none", default)]
    pub action_group_id: Option<String>,
    #[serde(
        rename = "wpml:actionGroupStartIndex", alias = "actionGroupStartIndex",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub action_group_start_index: Option<String>,
    #[serde(
        rename = "wpml:actionGroupEndIndex", alias = "actionGroupEndIndex",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub action_group_end_index: Option<String>,
    #[serde(rename = "wpml:actionGroupMode", alias = "actionGroupMode", skip_serializing_if = "Option::is_none", default)]
    pub action_group_mode: Option<String>,
    #[serde(rename = "wpml:actionTrigger", alias = "actionTrigger", skip_serializing_if = "Option::is_none", default)]
    pub action_trigger: Option<KmlActionTrigger>,
    /// Implicit collection: repeated child elements, no wrapper
    #[serde(rename = "wpml:action", alias = "action", skip_serializing_if = "Vec::is_empty", default)]
    pub actions: Vec<KmlAction>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KmlActionTrigger {
    #[serde(rename = "wpml:actionTriggerType", alias = "actionTriggerType", skip_serializing_if = "Option::is_none", default)]
    pub action_trigger_type: Option<String>,
    #[serde(
        rename = "wpml:actionTriggerParam", alias = "actionTriggerParam",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub action_trigger_param: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KmlAction {
    #[serde(rename = "wpml:actionId", alias = "actionId", skip_serializing_if = "Option::is_none", default)]
    pub action_id: Option<String>,
    #[serde(
        rename = "wpml:actionActuatorFunc", alias = "actionActuatorFunc",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub action_actuator_func: Option<String>,
    #[serde(rename = "wpml:actionActuatorFuncParam", alias = "actionActuatorFuncParam", default)]
    pub action_actuator_func_param: KmlActionActuatorFuncParam,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KmlActionActuatorFuncParam {
    #[serde(
        rename = "wpml:payloadPositionIndex", alias = "payloadPositionIndex",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub payload_position_index: Option<String>,
    #[serde(rename = "wpml:fileSuffix", alias = "fileSuffix", skip_serializing_if = "Option::is_none", default)]
    pub file_suffix: Option<String>,
    #[serde(
        rename = "wpml:useGlobalPayloadLensIndex", alias = "useGlobalPayloadLensIndex",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub use_global_payload_lens_index: Option<String>,
    #[serde(rename = "wpml:payloadLensIndex", alias = "payloadLensIndex", skip_serializing_if = "Option::is_none", default)]
    pub payload_lens_index: Option<String>,
    #[serde(
        rename = "wpml:gimbalHeadingYawBase", alias = "gimbalHeadingYawBase",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub gimbal_heading_yaw_base: Option<String>,
    #[serde(rename = "wpml:gimbalRotateMode", alias = "gimbalRotateMode", skip_serializing_if = "Option::is_none", default)]
    pub gimbal_rotate_mode: Option<String>,
    #[serde(
        rename = "wpml:gimbalPitchRotateEnable", alias = "gimbalPitchRotateEnable",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub gimbal_pitch_rotate_enable: Option<String>,
    #[serde(
        rename = "wpml:gimbalPitchRotateAngle", alias = "gimbalPitchRotateAngle",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub gimbal_pitch_rotate_angle: Option<String>,
    #[serde(
        rename = "wpml:gimbalRollRotateEnable", alias = "gimbalRollRotateEnable",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub gimbal_roll_rotate_enable: Option<String>,
    #[serde(
        rename = "wpml:gimbalRollRotateAngle", alias = "gimbalRollRotateAngle",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub gimbal_roll_rotate_angle: Option<String>,
    #[serde(
        rename = "wpml:gimbalYawRotateEnable", alias = "gimbalYawRotateEnable",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub gimbal_yaw_rotate_enable: Option<String>,
    #[serde(
        rename = "wpml:gimbalYawRotateAngle", alias = "gimbalYawRotateAngle",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub gimbal_yaw_rotate_angle: Option<String>,
    #[serde(
        rename = "wpml:gimbalRotateTimeEnable", alias = "gimbalRotateTimeEnable",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub gimbal_rotate_time_enable: Option<String>,
    #[serde(rename = "wpml:gimbalRotateTime", alias = "gimbalRotateTime", skip_serializing_if = "Option::is_none", default)]
    pub gimbal_rotate_time: Option<String>,
    #[serde(rename = "wpml:aircraftHeading", alias = "aircraftHeading", skip_serializing_if = "Option::is_none", default)]
    pub aircraft_heading: Option<String>,
    #[serde(rename = "wpml:aircraftPathMode", alias = "aircraftPathMode", skip_serializing_if = "Option::is_none", default)]
    pub aircraft_path_mode: Option<String>,
    #[serde(rename = "wpml:hoverTime", alias = "hoverTime", skip_serializing_if = "Option::is_none", default)]
    pub hover_time: Option<String>,
    #[serde(rename = "wpml:focalLength", alias = "focalLength", skip_serializing_if = "Option::is_none", default)]
    pub focal_length: Option<String>,
    #[serde(rename = "wpml:panoShotSubMode", alias = "panoShotSubMode", skip_serializing_if = "Option::is_none", default)]
    pub pano_shot_sub_mode: Option<String>,
}
