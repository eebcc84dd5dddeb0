//! XML codec for the container documents.
//!
//! Serialization and deserialization both run off the serde schema in
//! [`crate::document`], so field names and nesting cannot drift between the
//! two directions. Decoding skips elements the schema does not declare,
//! which keeps older readers working against newer documents.

use std::io::BufRead;

use quick_xml::se::Serializer;
use serde::Serialize;

use crate::document::KmlFile;
use crate::error::Result;

/// Every emitted document starts with this declaration.
pub const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

const ROOT_TAG: &str = "kml";

/// Serialize a document tree to an XML string, declaration included.
pub fn to_xml(file: &KmlFile) -> Result<String> {
    let mut body = String::new();
    let mut serializer = Serializer::with_root(&mut body, Some(ROOT_TAG))?;
    serializer.indent(' ', 2);
    file.serialize(serializer)?;
    let mut out = String::with_capacity(XML_HEADER.len() + body.len());
    out.push_str(XML_HEADER);
    out.push_str(&body);
    Ok(out)
}

/// Parse a document tree from an XML string.
pub fn from_xml(xml: &str) -> Result<KmlFile> {
    Ok(quick_xml::de::from_str(xml)?)
}

/// Parse a document tree from a buffered reader.
pub fn from_reader<R: BufRead>(reader: R) -> Result<KmlFile> {
    Ok(quick_xml::de::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_waylines;
    use crate::document::{KmlDocument, WPML_NAMESPACE};
    use crate::mission::{
        FinishAction, GimbalPitchMode, HeadingMode, HeadingSpec, RouteMission, RoutePoint,
        TemplateType, TurnMode, TurnSpec,
    };

    fn mission() -> RouteMission {
        RouteMission {
            template_type: TemplateType::Waypoint,
            drone_type: 89,
            sub_drone_type: None,
            payload_type: 42,
            payload_sub_type: None,
            payload_position: 0,
            image_format: "wide".into(),
            finish_action: Some(FinishAction::GoHome),
            exit_on_rc_lost_action: None,
            take_off_ref_point: None,
            global_height: 50.0,
            auto_flight_speed: 10.0,
            heading: Some(HeadingSpec {
                mode: HeadingMode::FollowWayline,
                angle: None,
                poi_point: None,
            }),
            turn: Some(TurnSpec {
                mode: TurnMode::ToPointAndStopWithDiscontinuityCurvature,
                damping_dist: None,
                use_straight_line: None,
            }),
            gimbal_pitch_mode: Some(GimbalPitchMode::Manual),
            route_points: vec![RoutePoint {
                index: 0,
                longitude: 113.9,
                latitude: 22.5,
                height: None,
                speed: None,
                heading: None,
                turn: None,
                gimbal_pitch_angle: None,
                action_groups: vec![],
            }],
            start_actions: vec![],
            mapping: None,
        }
    }

    #[test]
    fn emits_declaration_and_namespaces() {
        let file = build_waylines(&mission()).unwrap();
        let xml = to_xml(&file).unwrap();
        assert!(xml.starts_with(XML_HEADER));
        assert!(xml.contains("xmlns:wpml=\"http://www.dji.com/wpmz/1.0.2\""));
        assert!(xml.contains("<wpml:droneEnumValue>89</wpml:droneEnumValue>"));
        assert!(xml.contains("<coordinates>113.9,22.5</coordinates>"));
        // Absent options leave no trace.
        assert!(!xml.contains("wpml:takeOffRefPoint"));
        assert!(!xml.contains("wpml:author"));
    }

    #[test]
    fn round_trip_preserves_tree() {
        let file = build_waylines(&mission()).unwrap();
        let xml = to_xml(&file).unwrap();
        let parsed = from_xml(&xml).unwrap();
        assert_eq!(parsed, file);
        assert_eq!(parsed.xmlns_wpml, WPML_NAMESPACE);
    }

    #[test]
    fn prefixed_elements_decode_into_fields() {
        // The deserializer reports local names with the wpml prefix
        // stripped; every prefixed field must still populate.
        let xml = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
            <kml xmlns=\"http://www.opengis.net/kml/2.2\" \
                 xmlns:wpml=\"http://www.dji.com/wpmz/1.0.2\">\
              <Document>\
                <wpml:missionConfig>\
                  <wpml:flyToWaylineMode>safely</wpml:flyToWaylineMode>\
                  <wpml:droneInfo>\
                    <wpml:droneEnumValue>89</wpml:droneEnumValue>\
                  </wpml:droneInfo>\
                </wpml:missionConfig>\
                <Folder>\
                  <wpml:waylineId>0</wpml:waylineId>\
                  <Placemark>\
                    <wpml:index>0</wpml:index>\
                    <wpml:executeHeight>50.0</wpml:executeHeight>\
                    <wpml:waypointTurnParam>\
                      <wpml:waypointTurnMode>coordinateTurn</wpml:waypointTurnMode>\
                    </wpml:waypointTurnParam>\
                  </Placemark>\
                </Folder>\
              </Document>\
            </kml>";
        let parsed = from_xml(xml).unwrap();
        assert_eq!(parsed.xmlns_wpml, WPML_NAMESPACE);
        let config = &parsed.document.mission_config;
        assert_eq!(config.fly_to_wayline_mode.as_deref(), Some("safely"));
        assert_eq!(config.drone_info.drone_enum_value.as_deref(), Some("89"));
        let folder = &parsed.document.folder;
        assert_eq!(folder.wayline_id.as_deref(), Some("0"));
        let placemark = &folder.placemarks[0];
        assert_eq!(placemark.execute_height.as_deref(), Some("50.0"));
        assert_eq!(
            placemark
                .waypoint_turn_param
                .as_ref()
                .unwrap()
                .waypoint_turn_mode
                .as_deref(),
            Some("coordinateTurn")
        );
    }

    #[test]
    fn unknown_elements_are_skipped() {
        let xml = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
            <kml xmlns=\"http://www.opengis.net/kml/2.2\" \
                 xmlns:wpml=\"http://www.dji.com/wpmz/1.0.2\">\
              <Document>\
                <wpml:author>wayline</wpml:author>\
                <wpml:someFutureExtension>ignored</wpml:someFutureExtension>\
                <Folder>\
                  <wpml:templateId>0</wpml:templateId>\
                </Folder>\
              </Document>\
            </kml>";
        let parsed = from_xml(xml).unwrap();
        assert_eq!(parsed.document.author.as_deref(), Some("wayline"));
        assert_eq!(parsed.document.folder.template_id.as_deref(), Some("0"));
    }

    #[test]
    fn repeated_elements_collect_without_wrapper() {
        let xml = "<kml>\
            <Document>\
              <Folder>\
                <Placemark>\
                  <wpml:index>0</wpml:index>\
                  <wpml:actionGroup>\
                    <wpml:actionGroupId>1</wpml:actionGroupId>\
                    <wpml:action>\
                      <wpml:actionId>0</wpml:actionId>\
                      <wpml:actionActuatorFunc>hover</wpml:actionActuatorFunc>\
                      <wpml:actionActuatorFuncParam>\
                        <wpml:hoverTime>5.0</wpml:hoverTime>\
                      </wpml:actionActuatorFuncParam>\
                    </wpml:action>\
                    <wpml:action>\
                      <wpml:actionId>1</wpml:actionId>\
                      <wpml:actionActuatorFunc>takePhoto</wpml:actionActuatorFunc>\
                      <wpml:actionActuatorFuncParam/>\
                    </wpml:action>\
                  </wpml:actionGroup>\
                  <wpml:actionGroup>\
                    <wpml:actionGroupId>2</wpml:actionGroupId>\
                  </wpml:actionGroup>\
                </Placemark>\
              </Folder>\
            </Document>\
          </kml>";
        let parsed = from_xml(xml).unwrap();
        let placemark = &parsed.document.folder.placemarks[0];
        assert_eq!(placemark.action_groups.len(), 2);
        let actions = &placemark.action_groups[0].actions;
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0].action_actuator_func.as_deref(), Some("hover"));
        assert_eq!(
            actions[0].action_actuator_func_param.hover_time.as_deref(),
            Some("5.0")
        );
        assert_eq!(actions[1].action_actuator_func.as_deref(), Some("takePhoto"));
    }

    #[test]
    fn malformed_xml_is_an_error() {
        assert!(from_xml("<kml><Document></kml>").is_err());
        let empty = from_xml("<kml/>").unwrap();
        assert_eq!(empty.document, KmlDocument::default());
    }
}
