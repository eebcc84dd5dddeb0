//! Document builder: turns a [`RouteMission`] into one of the two container
//! documents.
//!
//! The same mission builds both documents, but the two kinds represent
//! settings asymmetrically: the authoring document records which attributes
//! fall back to the mission globals (uses-global flags), while the execution
//! document always stores the fully resolved value and never the flag. Each
//! overridable attribute (height, speed, heading, turn) resolves
//! independently per route point.

use chrono::Utc;

use crate::actions::encode_actions;
use crate::document::*;
use crate::error::{Error, Result};
use crate::mission::{
    ActionGroup, GimbalPitchMode, HeadingMode, HeadingSpec, MappingParams, RouteMission,
    RoutePoint, TemplateType, TriggerType, TurnMode, TurnSpec,
};
use crate::survey;

const AUTHOR: &str = "wayline";
const FLY_TO_WAYLINE_SAFELY: &str = "safely";
const RC_LOST_GO_CONTINUE: &str = "goContinue";
const RC_LOST_EXECUTE_ACTION: &str = "executeLostAction";
const TAKE_OFF_SECURITY_HEIGHT: &str = "20";
const GLOBAL_TRANSITIONAL_SPEED: &str = "15";
const GLOBAL_RTH_HEIGHT: &str = "100";
const COORDINATE_MODE_WGS84: &str = "WGS84";
const HEIGHT_MODE_RELATIVE_TO_START: &str = "relativeToStartPoint";
const POSITIONING_TYPE_GPS: &str = "GPS";
const FOCUS_MODE_FIRST_POINT: &str = "firstPoint";
const METERING_MODE_AVERAGE: &str = "average";
const RETURN_MODE_SINGLE_STRONGEST: &str = "singleReturnStrongest";
const LIDAR_SAMPLING_RATE: &str = "240000";
const SCANNING_MODE_REPETITIVE: &str = "repetitive";
const HEADING_PATH_FOLLOW_BAD_ARC: &str = "followBadArc";
const ACTION_GROUP_MODE_SEQUENCE: &str = "sequence";

/// Which of the two container documents to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Authoring document (`wpmz/template.kml`)
    Template,
    /// Execution document (`wpmz/waylines.wpml`)
    Waylines,
}

/// Build the authoring document.
pub fn build_template(mission: &RouteMission) -> Result<KmlFile> {
    build_document(mission, DocumentKind::Template)
}

/// Build the execution document.
pub fn build_waylines(mission: &RouteMission) -> Result<KmlFile> {
    build_document(mission, DocumentKind::Waylines)
}

/// Build one document of the given kind. None of the inputs are mutated and
/// no partial tree is returned on error.
pub fn build_document(mission: &RouteMission, kind: DocumentKind) -> Result<KmlFile> {
    let mut document = KmlDocument::default();
    if kind == DocumentKind::Template {
        document.author = Some(AUTHOR.to_string());
        let now = Utc::now().timestamp_millis().to_string();
        document.create_time = Some(now.clone());
        document.update_time = Some(now);
    }
    document.mission_config = build_mission_config(mission);
    document.folder = build_folder(mission, kind)?;
    tracing::debug!(
        kind = ?kind,
        template = mission.template_type.as_str(),
        points = mission.route_points.len(),
        "built wayline document"
    );
    Ok(KmlFile::new(document))
}

fn build_mission_config(mission: &RouteMission) -> KmlMissionConfig {
    let mut config = KmlMissionConfig {
        fly_to_wayline_mode: Some(FLY_TO_WAYLINE_SAFELY.to_string()),
        finish_action: mission.finish_action.map(|a| a.as_str().to_string()),
        take_off_security_height: Some(TAKE_OFF_SECURITY_HEIGHT.to_string()),
        global_transitional_speed: Some(GLOBAL_TRANSITIONAL_SPEED.to_string()),
        global_rth_height: Some(GLOBAL_RTH_HEIGHT.to_string()),
        take_off_ref_point: mission.take_off_ref_point.clone(),
        drone_info: build_drone_info(mission),
        payload_info: build_payload_info(mission),
        ..Default::default()
    };
    match mission.exit_on_rc_lost_action {
        Some(action) => {
            config.exit_on_rc_lost = Some(RC_LOST_EXECUTE_ACTION.to_string());
            config.execute_rc_lost_action = Some(action.as_str().to_string());
        }
        None => config.exit_on_rc_lost = Some(RC_LOST_GO_CONTINUE.to_string()),
    }
    config
}

/// Only the M30, M3E/M3T/M3M, M3D/M3TD and M4D/M4TD families carry a
/// sub-model value on the wire.
fn drone_carries_sub_type(drone_type: i32) -> bool {
    matches!(drone_type, 67 | 77 | 91 | 100)
}

fn build_drone_info(mission: &RouteMission) -> KmlDroneInfo {
    let mut info = KmlDroneInfo {
        drone_enum_value: Some(mission.drone_type.to_string()),
        drone_sub_enum_value: None,
    };
    if drone_carries_sub_type(mission.drone_type) {
        info.drone_sub_enum_value = mission.sub_drone_type.map(|v| v.to_string());
    }
    info
}

fn build_payload_info(mission: &RouteMission) -> KmlPayloadInfo {
    KmlPayloadInfo {
        payload_enum_value: Some(mission.payload_type.to_string()),
        payload_sub_enum_value: mission.payload_sub_type.map(|v| v.to_string()),
        payload_position_index: Some(mission.payload_position.to_string()),
    }
}

fn build_folder(mission: &RouteMission, kind: DocumentKind) -> Result<KmlFolder> {
    let mut folder = KmlFolder {
        template_id: Some("0".to_string()),
        auto_flight_speed: Some(fmt_num(mission.auto_flight_speed)),
        ..Default::default()
    };

    match kind {
        DocumentKind::Template => {
            folder.template_type = Some(mission.template_type.as_str().to_string());
            folder.wayline_coordinate_sys_param = Some(build_coordinate_sys_param(
                mission.template_type,
                mission.global_height,
            ));
            folder.payload_param = Some(build_payload_param(mission));
        }
        DocumentKind::Waylines => {
            folder.wayline_id = Some("0".to_string());
            folder.execute_height_mode = Some(HEIGHT_MODE_RELATIVE_TO_START.to_string());
            if !mission.start_actions.is_empty() {
                folder.start_action_group = Some(KmlActionGroup {
                    actions: encode_actions(&mission.start_actions, mission),
                    ..Default::default()
                });
            }
        }
    }

    if kind == DocumentKind::Template && mission.template_type == TemplateType::Waypoint {
        let turn = mission
            .turn
            .as_ref()
            .ok_or(Error::MissingConfiguration("turn"))?;
        let heading = mission
            .heading
            .as_ref()
            .ok_or(Error::MissingConfiguration("heading"))?;
        let gimbal_pitch_mode = mission
            .gimbal_pitch_mode
            .ok_or(Error::MissingConfiguration("gimbalPitchMode"))?;

        folder.global_waypoint_turn_mode = Some(turn.mode.as_str().to_string());
        if matches!(
            turn.mode,
            TurnMode::ToPointAndStopWithContinuityCurvature
                | TurnMode::ToPointAndPassWithContinuityCurvature
        ) {
            folder.global_use_straight_line = Some("1".to_string());
        }
        folder.gimbal_pitch_mode = Some(gimbal_pitch_mode.as_str().to_string());
        folder.global_height = Some(fmt_num(mission.global_height));
        folder.global_waypoint_heading_param = Some(build_heading_param(heading));
        folder.placemarks = build_route_placemarks(mission, kind)?;
    } else if kind == DocumentKind::Template {
        // Survey authoring: a single placemark holding the capture area.
        let mapping = mission
            .mapping
            .as_ref()
            .ok_or(Error::MissingConfiguration("mapping"))?;
        folder.placemarks = vec![build_survey_placemark(mapping, mission.global_height)];
    } else {
        // Execution: one placemark per route point for every template type.
        // For the survey templates the points were planned upstream.
        folder.placemarks = build_route_placemarks(mission, kind)?;
    }

    Ok(folder)
}

fn build_coordinate_sys_param(
    template_type: TemplateType,
    global_height: f64,
) -> KmlWaylineCoordinateSysParam {
    let mut param = KmlWaylineCoordinateSysParam {
        coordinate_mode: Some(COORDINATE_MODE_WGS84.to_string()),
        height_mode: Some(HEIGHT_MODE_RELATIVE_TO_START.to_string()),
        positioning_type: Some(POSITIONING_TYPE_GPS.to_string()),
        ..Default::default()
    };
    match template_type {
        TemplateType::Waypoint => {}
        TemplateType::Mapping2d | TemplateType::Mapping3d | TemplateType::MappingStrip => {
            let height = fmt_num(global_height);
            param.global_shoot_height = Some(height.clone());
            param.surface_follow_mode_enable = Some("1".to_string());
            param.surface_relative_height = Some(height);
        }
    }
    param
}

fn build_payload_param(mission: &RouteMission) -> KmlPayloadParam {
    KmlPayloadParam {
        payload_position_index: Some(mission.payload_position.to_string()),
        focus_mode: Some(FOCUS_MODE_FIRST_POINT.to_string()),
        metering_mode: Some(METERING_MODE_AVERAGE.to_string()),
        dewarping_enable: Some("1".to_string()),
        return_mode: Some(RETURN_MODE_SINGLE_STRONGEST.to_string()),
        sampling_rate: Some(LIDAR_SAMPLING_RATE.to_string()),
        scanning_mode: Some(SCANNING_MODE_REPETITIVE.to_string()),
        model_coloring_enable: Some("1".to_string()),
        image_format: Some(mission.image_format.clone()),
    }
}

fn build_route_placemarks(mission: &RouteMission, kind: DocumentKind) -> Result<Vec<KmlPlacemark>> {
    let boundary = mission.boundary_indices();
    mission
        .route_points
        .iter()
        .map(|point| {
            let is_boundary =
                boundary.is_some_and(|(min, max)| point.index == min || point.index == max);
            build_placemark(point, mission, kind, is_boundary)
        })
        .collect()
}

fn build_placemark(
    point: &RoutePoint,
    mission: &RouteMission,
    kind: DocumentKind,
    is_boundary: bool,
) -> Result<KmlPlacemark> {
    let mut placemark = KmlPlacemark {
        is_risky: Some("0".to_string()),
        point: Some(KmlPoint {
            coordinates: format!("{},{}", fmt_num(point.longitude), fmt_num(point.latitude)),
        }),
        index: Some(point.index.to_string()),
        ..Default::default()
    };

    resolve_height(point, mission, kind, &mut placemark);
    resolve_speed(point, mission, kind, &mut placemark);
    resolve_heading(point, mission, kind, &mut placemark)?;
    resolve_turn(point, mission, kind, is_boundary, &mut placemark)?;

    if kind == DocumentKind::Template {
        if let Some(angle) = point.gimbal_pitch_angle {
            if mission.gimbal_pitch_mode == Some(GimbalPitchMode::UsePointSetting) {
                placemark.gimbal_pitch_angle = Some(fmt_num(angle));
            }
        }
    }

    if !point.action_groups.is_empty() {
        placemark.action_groups = point
            .action_groups
            .iter()
            .map(|group| build_action_group(group, mission))
            .collect();
    }

    Ok(placemark)
}

fn resolve_height(
    point: &RoutePoint,
    mission: &RouteMission,
    kind: DocumentKind,
    placemark: &mut KmlPlacemark,
) {
    match (point.height, kind) {
        (Some(height), DocumentKind::Template) => {
            placemark.use_global_height = Some("0".to_string());
            placemark.ellipsoid_height = Some(fmt_num(height));
            placemark.height = Some(fmt_num(height));
        }
        (Some(height), DocumentKind::Waylines) => {
            placemark.execute_height = Some(fmt_num(height));
        }
        (None, DocumentKind::Template) => {
            placemark.use_global_height = Some("1".to_string());
        }
        (None, DocumentKind::Waylines) => {
            placemark.execute_height = Some(fmt_num(mission.global_height));
        }
    }
}

fn resolve_speed(
    point: &RoutePoint,
    mission: &RouteMission,
    kind: DocumentKind,
    placemark: &mut KmlPlacemark,
) {
    match (point.speed, kind) {
        (Some(speed), DocumentKind::Template) => {
            placemark.use_global_speed = Some("0".to_string());
            placemark.waypoint_speed = Some(fmt_num(speed));
        }
        (Some(speed), DocumentKind::Waylines) => {
            placemark.waypoint_speed = Some(fmt_num(speed));
        }
        (None, DocumentKind::Template) => {
            placemark.use_global_speed = Some("1".to_string());
        }
        (None, DocumentKind::Waylines) => {
            placemark.waypoint_speed = Some(fmt_num(mission.auto_flight_speed));
        }
    }
}

fn resolve_heading(
    point: &RoutePoint,
    mission: &RouteMission,
    kind: DocumentKind,
    placemark: &mut KmlPlacemark,
) -> Result<()> {
    match &point.heading {
        Some(heading) => {
            if kind == DocumentKind::Template {
                placemark.use_global_heading_param = Some("0".to_string());
            }
            placemark.waypoint_heading_param = Some(build_heading_param(heading));
        }
        None => match kind {
            DocumentKind::Template => {
                placemark.use_global_heading_param = Some("1".to_string());
            }
            DocumentKind::Waylines => {
                let global = mission
                    .heading
                    .as_ref()
                    .ok_or(Error::MissingConfiguration("heading"))?;
                placemark.waypoint_heading_param = Some(build_heading_param(global));
            }
        },
    }
    Ok(())
}

fn resolve_turn(
    point: &RoutePoint,
    mission: &RouteMission,
    kind: DocumentKind,
    is_boundary: bool,
    placemark: &mut KmlPlacemark,
) -> Result<()> {
    match &point.turn {
        Some(turn) => {
            if kind == DocumentKind::Template {
                placemark.use_global_turn_param = Some("0".to_string());
            }
            placemark.waypoint_turn_param = Some(build_turn_param(turn, is_boundary));
            if let Some(straight) = turn.use_straight_line {
                placemark.use_straight_line = Some(flag(straight));
            }
        }
        None => match kind {
            DocumentKind::Template => {
                placemark.use_global_turn_param = Some("1".to_string());
            }
            DocumentKind::Waylines => {
                let global = mission
                    .turn
                    .as_ref()
                    .ok_or(Error::MissingConfiguration("turn"))?;
                placemark.waypoint_turn_param = Some(build_turn_param(global, is_boundary));
            }
        },
    }
    Ok(())
}

fn build_heading_param(heading: &HeadingSpec) -> KmlWaypointHeadingParam {
    let mut param = KmlWaypointHeadingParam {
        waypoint_heading_mode: Some(heading.mode.as_str().to_string()),
        ..Default::default()
    };
    match heading.mode {
        HeadingMode::SmoothTransition => {
            param.waypoint_heading_angle = heading.angle.map(fmt_num);
        }
        HeadingMode::TowardPoi => {
            param.waypoint_poi_point = heading.poi_point.clone();
        }
        HeadingMode::FollowWayline | HeadingMode::Manually | HeadingMode::Fixed => {}
    }
    param.waypoint_heading_path_mode = Some(HEADING_PATH_FOLLOW_BAD_ARC.to_string());
    param
}

/// Build a turn parameter block. A boundary point must come to a stop, so a
/// coordinated turn there degrades to the straight stop-at-point mode.
fn build_turn_param(turn: &TurnSpec, is_boundary: bool) -> KmlWaypointTurnParam {
    let mode = if is_boundary && turn.mode == TurnMode::CoordinateTurn {
        TurnMode::ToPointAndStopWithDiscontinuityCurvature
    } else {
        turn.mode
    };
    let mut param = KmlWaypointTurnParam {
        waypoint_turn_mode: Some(mode.as_str().to_string()),
        ..Default::default()
    };
    // The damping distance keys off the requested mode, not the corrected one.
    if matches!(
        turn.mode,
        TurnMode::CoordinateTurn | TurnMode::ToPointAndPassWithContinuityCurvature
    ) && turn.use_straight_line == Some(true)
    {
        param.waypoint_turn_damping_dist = turn.damping_dist.map(fmt_num);
    }
    param
}

fn build_survey_placemark(mapping: &MappingParams, global_height: f64) -> KmlPlacemark {
    let height = fmt_num(global_height);
    KmlPlacemark {
        cali_flight_enable: Some("0".to_string()),
        elevation_optimize_enable: mapping.elevation_optimize.map(flag),
        smart_oblique_enable: Some("0".to_string()),
        shoot_type: mapping.shoot_type.map(|s| s.as_str().to_string()),
        direction: mapping.direction.clone(),
        margin: mapping.margin.clone(),
        overlap: Some(survey::build_overlap(mapping.overlap_h, mapping.overlap_w)),
        ellipsoid_height: Some(height.clone()),
        height: Some(height),
        facade_wayline_enable: Some("0".to_string()),
        polygon: Some(survey::build_polygon(&mapping.vertices)),
        ..Default::default()
    }
}

fn build_action_group(group: &ActionGroup, mission: &RouteMission) -> KmlActionGroup {
    KmlActionGroup {
        action_group_id: Some(group.id.to_string()),
        action_group_start_index: Some(group.start_index.to_string()),
        action_group_end_index: Some(group.end_index.to_string()),
        action_group_mode: Some(ACTION_GROUP_MODE_SEQUENCE.to_string()),
        action_trigger: Some(build_action_trigger(group)),
        actions: encode_actions(&group.actions, mission),
    }
}

fn build_action_trigger(group: &ActionGroup) -> KmlActionTrigger {
    let mut trigger = KmlActionTrigger {
        action_trigger_type: Some(group.trigger_type.as_str().to_string()),
        ..Default::default()
    };
    if matches!(
        group.trigger_type,
        TriggerType::MultipleTiming | TriggerType::MultipleDistance
    ) {
        trigger.action_trigger_param = group.trigger_param.map(fmt_num);
    }
    trigger
}

/// Format a numeric wire value. Uses the debug float form so whole numbers
/// keep a trailing ".0" ("50.0", not "50"), which the consumer expects.
pub(crate) fn fmt_num(value: f64) -> String {
    format!("{value:?}")
}

fn flag(value: bool) -> String {
    if value { "1" } else { "0" }.to_string()
}
