//! Action intent classification and executor-function encoding.
//!
//! A [`PointAction`] arrives with up to nine optional directive fields; it is
//! classified exactly once into an [`ActionKind`] and from then on every
//! branch matches the tagged union exhaustively. An intent that matches no
//! directive yields no action at all.

use crate::document::{KmlAction, KmlActionActuatorFuncParam};
use crate::mission::{PointAction, RouteMission};

const GIMBAL_YAW_BASE_NORTH: &str = "north";
const GIMBAL_ROTATE_ABSOLUTE: &str = "absoluteAngle";
const AIRCRAFT_PATH_CLOCKWISE: &str = "clockwise";
const PANO_SHOT_360: &str = "panoShot_360";

/// A disambiguated action intent, one variant per executor function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActionKind {
    Hover { seconds: f64 },
    TakePhoto,
    RotateYaw { heading: f64 },
    GimbalRotate { yaw: Option<f64>, pitch: Option<f64> },
    Zoom { focal_length: f64 },
    PanoShot,
    StartRecord,
    StopRecord,
}

impl ActionKind {
    /// Wire name of the executor function.
    pub fn actuator_func(&self) -> &'static str {
        match self {
            ActionKind::Hover { .. } => "hover",
            ActionKind::TakePhoto => "takePhoto",
            ActionKind::RotateYaw { .. } => "rotateYaw",
            ActionKind::GimbalRotate { .. } => "gimbalRotate",
            ActionKind::Zoom { .. } => "zoom",
            ActionKind::PanoShot => "panoShot",
            ActionKind::StartRecord => "startRecord",
            ActionKind::StopRecord => "stopRecord",
        }
    }
}

impl PointAction {
    /// Resolve the intent into a single [`ActionKind`] by a fixed priority
    /// order: hover, photo, aircraft heading, gimbal rotate, zoom, pano,
    /// start record, stop record. First match wins, so an over-specified
    /// intent still produces exactly one action. Returns `None` when no
    /// directive field is set.
    pub fn classify(&self) -> Option<ActionKind> {
        if let Some(seconds) = self.hover_time {
            return Some(ActionKind::Hover { seconds });
        }
        if self.take_photo == Some(true) {
            return Some(ActionKind::TakePhoto);
        }
        if let Some(heading) = self.aircraft_heading {
            return Some(ActionKind::RotateYaw { heading });
        }
        if self.gimbal_yaw_rotate_angle.is_some() || self.gimbal_pitch_rotate_angle.is_some() {
            return Some(ActionKind::GimbalRotate {
                yaw: self.gimbal_yaw_rotate_angle,
                pitch: self.gimbal_pitch_rotate_angle,
            });
        }
        if let Some(focal_length) = self.zoom {
            return Some(ActionKind::Zoom { focal_length });
        }
        if self.pano_shot == Some(true) {
            return Some(ActionKind::PanoShot);
        }
        if self.start_record == Some(true) {
            return Some(ActionKind::StartRecord);
        }
        if self.stop_record == Some(true) {
            return Some(ActionKind::StopRecord);
        }
        None
    }
}

/// Encode an ordered intent list into executor actions. Unclassifiable
/// intents are dropped.
pub fn encode_actions(intents: &[PointAction], mission: &RouteMission) -> Vec<KmlAction> {
    intents
        .iter()
        .filter_map(|intent| {
            let kind = intent.classify()?;
            Some(build_action(intent, kind, mission))
        })
        .collect()
}

fn build_action(intent: &PointAction, kind: ActionKind, mission: &RouteMission) -> KmlAction {
    KmlAction {
        action_id: Some(intent.action_index.to_string()),
        action_actuator_func: Some(kind.actuator_func().to_string()),
        action_actuator_func_param: build_func_param(intent, kind, mission),
    }
}

fn build_func_param(
    intent: &PointAction,
    kind: ActionKind,
    mission: &RouteMission,
) -> KmlActionActuatorFuncParam {
    let mut param = KmlActionActuatorFuncParam::default();
    let mount = mission.payload_position.to_string();
    match kind {
        ActionKind::Hover { seconds } => {
            param.hover_time = Some(crate::builder::fmt_num(seconds));
        }
        ActionKind::TakePhoto | ActionKind::StartRecord => {
            param.payload_position_index = Some(mount);
            param.file_suffix = Some(String::new());
            set_lens_selection(&mut param, intent, mission);
        }
        ActionKind::RotateYaw { heading } => {
            param.aircraft_heading = Some(crate::builder::fmt_num(heading));
            param.aircraft_path_mode = Some(AIRCRAFT_PATH_CLOCKWISE.to_string());
        }
        ActionKind::GimbalRotate { yaw, pitch } => {
            param.payload_position_index = Some(mount);
            param.gimbal_heading_yaw_base = Some(GIMBAL_YAW_BASE_NORTH.to_string());
            param.gimbal_rotate_mode = Some(GIMBAL_ROTATE_ABSOLUTE.to_string());
            let (pitch_enable, pitch_angle) = axis_setting(pitch);
            param.gimbal_pitch_rotate_enable = Some(pitch_enable);
            param.gimbal_pitch_rotate_angle = Some(pitch_angle);
            // Roll is never driven by an intent.
            param.gimbal_roll_rotate_enable = Some("0".to_string());
            param.gimbal_roll_rotate_angle = Some("0".to_string());
            let (yaw_enable, yaw_angle) = axis_setting(yaw);
            param.gimbal_yaw_rotate_enable = Some(yaw_enable);
            param.gimbal_yaw_rotate_angle = Some(yaw_angle);
            param.gimbal_rotate_time_enable = Some("0".to_string());
            param.gimbal_rotate_time = Some("0".to_string());
        }
        ActionKind::Zoom { focal_length } => {
            param.payload_position_index = Some(mount);
            param.focal_length = Some(crate::builder::fmt_num(focal_length));
        }
        ActionKind::PanoShot => {
            param.payload_position_index = Some(mount);
            set_lens_selection(&mut param, intent, mission);
            param.pano_shot_sub_mode = Some(PANO_SHOT_360.to_string());
        }
        ActionKind::StopRecord => {
            param.payload_position_index = Some(mount);
        }
    }
    param
}

/// Each gimbal axis is independently enabled; a disabled axis still carries
/// an explicit zero angle.
fn axis_setting(angle: Option<f64>) -> (String, String) {
    match angle {
        Some(a) => ("1".to_string(), crate::builder::fmt_num(a)),
        None => ("0".to_string(), "0".to_string()),
    }
}

fn set_lens_selection(
    param: &mut KmlActionActuatorFuncParam,
    intent: &PointAction,
    mission: &RouteMission,
) {
    let use_global = intent.use_global_lens.unwrap_or(true);
    param.use_global_payload_lens_index = Some(if use_global { "1" } else { "0" }.to_string());
    param.payload_lens_index = if use_global {
        Some(mission.image_format.clone())
    } else {
        intent.lens.clone()
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mission::TemplateType;

    fn mission() -> RouteMission {
        RouteMission {
            template_type: TemplateType::Waypoint,
            drone_type: 89,
            sub_drone_type: None,
            payload_type: 42,
            payload_sub_type: None,
            payload_position: 0,
            image_format: "wide".into(),
            finish_action: None,
            exit_on_rc_lost_action: None,
            take_off_ref_point: None,
            global_height: 50.0,
            auto_flight_speed: 10.0,
            heading: None,
            turn: None,
            gimbal_pitch_mode: None,
            route_points: vec![],
            start_actions: vec![],
            mapping: None,
        }
    }

    #[test]
    fn hover_action() {
        let intent = PointAction {
            action_index: 0,
            hover_time: Some(5.0),
            ..Default::default()
        };
        let actions = encode_actions(&[intent], &mission());
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].action_actuator_func.as_deref(), Some("hover"));
        assert_eq!(
            actions[0].action_actuator_func_param.hover_time.as_deref(),
            Some("5.0")
        );
        // Only the hover parameter is populated.
        assert!(actions[0]
            .action_actuator_func_param
            .payload_position_index
            .is_none());
    }

    #[test]
    fn pano_shot_uses_global_lens() {
        let intent = PointAction {
            action_index: 2,
            pano_shot: Some(true),
            use_global_lens: Some(true),
            ..Default::default()
        };
        let actions = encode_actions(&[intent], &mission());
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].action_actuator_func.as_deref(), Some("panoShot"));
        let param = &actions[0].action_actuator_func_param;
        assert_eq!(param.payload_lens_index.as_deref(), Some("wide"));
        assert_eq!(param.use_global_payload_lens_index.as_deref(), Some("1"));
        assert_eq!(param.pano_shot_sub_mode.as_deref(), Some("panoShot_360"));
    }

    #[test]
    fn take_photo_point_lens_override() {
        let intent = PointAction {
            take_photo: Some(true),
            use_global_lens: Some(false),
            lens: Some("ir".into()),
            ..Default::default()
        };
        let actions = encode_actions(&[intent], &mission());
        let param = &actions[0].action_actuator_func_param;
        assert_eq!(actions[0].action_actuator_func.as_deref(), Some("takePhoto"));
        assert_eq!(param.use_global_payload_lens_index.as_deref(), Some("0"));
        assert_eq!(param.payload_lens_index.as_deref(), Some("ir"));
        assert_eq!(param.file_suffix.as_deref(), Some(""));
    }

    #[test]
    fn priority_order_prefers_hover() {
        // Malformed upstream input: two directives set. The classifier picks
        // one deterministically instead of failing.
        let intent = PointAction {
            hover_time: Some(3.0),
            take_photo: Some(true),
            ..Default::default()
        };
        assert_eq!(intent.classify(), Some(ActionKind::Hover { seconds: 3.0 }));
        let actions = encode_actions(&[intent], &mission());
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].action_actuator_func.as_deref(), Some("hover"));
    }

    #[test]
    fn photo_beats_heading() {
        let intent = PointAction {
            take_photo: Some(true),
            aircraft_heading: Some(90.0),
            ..Default::default()
        };
        assert_eq!(intent.classify(), Some(ActionKind::TakePhoto));
    }

    #[test]
    fn unmatched_intent_dropped() {
        let empty = PointAction::default();
        assert_eq!(empty.classify(), None);
        // A false flag is not a directive either.
        let negated = PointAction {
            start_record: Some(false),
            ..Default::default()
        };
        assert_eq!(negated.classify(), None);
        assert!(encode_actions(&[empty, negated], &mission()).is_empty());
    }

    #[test]
    fn gimbal_rotate_yaw_only() {
        let intent = PointAction {
            gimbal_yaw_rotate_angle: Some(-45.0),
            ..Default::default()
        };
        let actions = encode_actions(&[intent], &mission());
        let param = &actions[0].action_actuator_func_param;
        assert_eq!(
            actions[0].action_actuator_func.as_deref(),
            Some("gimbalRotate")
        );
        assert_eq!(param.gimbal_yaw_rotate_enable.as_deref(), Some("1"));
        assert_eq!(param.gimbal_yaw_rotate_angle.as_deref(), Some("-45.0"));
        assert_eq!(param.gimbal_pitch_rotate_enable.as_deref(), Some("0"));
        assert_eq!(param.gimbal_pitch_rotate_angle.as_deref(), Some("0"));
        assert_eq!(param.gimbal_rotate_mode.as_deref(), Some("absoluteAngle"));
        assert_eq!(param.gimbal_heading_yaw_base.as_deref(), Some("north"));
    }

    #[test]
    fn rotate_yaw_clockwise() {
        let intent = PointAction {
            action_index: 7,
            aircraft_heading: Some(180.0),
            ..Default::default()
        };
        let actions = encode_actions(&[intent], &mission());
        assert_eq!(actions[0].action_id.as_deref(), Some("7"));
        assert_eq!(actions[0].action_actuator_func.as_deref(), Some("rotateYaw"));
        let param = &actions[0].action_actuator_func_param;
        assert_eq!(param.aircraft_heading.as_deref(), Some("180.0"));
        assert_eq!(param.aircraft_path_mode.as_deref(), Some("clockwise"));
    }

    #[test]
    fn stop_record_mount_only() {
        let intent = PointAction {
            stop_record: Some(true),
            ..Default::default()
        };
        let actions = encode_actions(&[intent], &mission());
        let param = &actions[0].action_actuator_func_param;
        assert_eq!(param.payload_position_index.as_deref(), Some("0"));
        assert!(param.use_global_payload_lens_index.is_none());
        assert!(param.file_suffix.is_none());
    }
}
