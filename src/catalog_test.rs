#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// TokenKind tags
// =============================================================

#[test]
fn tags_parse_back_to_kind() {
    for kind in TokenKind::ALL {
        assert_eq!(kind.tag().parse::<TokenKind>().unwrap(), kind);
    }
}

#[test]
fn unknown_tag_is_rejected() {
    let err = "not-a-real-type".parse::<TokenKind>().unwrap_err();
    assert!(matches!(err, PlannerError::UnknownType(ref t) if t == "not-a-real-type"));
    assert_eq!(err.error_code(), "E_UNKNOWN_TYPE");
}

#[test]
fn tag_parsing_is_case_sensitive() {
    assert!("Host".parse::<TokenKind>().is_err());
    assert!("keylight".parse::<TokenKind>().is_err());
}

#[test]
fn kind_serde_uses_tags() {
    for kind in TokenKind::ALL {
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, format!("\"{}\"", kind.tag()));
        let back: TokenKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, kind);
    }
}

#[test]
fn kind_display_is_tag() {
    assert_eq!(TokenKind::FillLight.to_string(), "fillLight");
}

// =============================================================
// Records
// =============================================================

#[test]
fn every_record_points_back_at_its_kind() {
    for kind in TokenKind::ALL {
        assert_eq!(kind.spec().kind, kind);
    }
}

#[test]
fn dimensions_match_catalog() {
    let cases = [
        (TokenKind::Host, 70.0, 70.0),
        (TokenKind::Guest, 70.0, 70.0),
        (TokenKind::Iphone, 50.0, 50.0),
        (TokenKind::Sony, 60.0, 60.0),
        (TokenKind::KeyLight, 50.0, 50.0),
        (TokenKind::FillLight, 50.0, 50.0),
        (TokenKind::Chair, 70.0, 70.0),
        (TokenKind::Table, 150.0, 80.0),
    ];
    for (kind, w, h) in cases {
        assert_eq!(kind.spec().width, w, "{kind} width");
        assert_eq!(kind.spec().height, h, "{kind} height");
    }
}

#[test]
fn only_cameras_and_lights_have_field_of_view() {
    for kind in TokenKind::ALL {
        let spec = kind.spec();
        let expected = matches!(spec.group, Group::Cameras | Group::Lights);
        assert_eq!(spec.has_field_of_view(), expected, "{kind}");
    }
}

#[test]
fn cone_kinds_match_catalog() {
    assert_eq!(TokenKind::Iphone.spec().field_of_view, Some(FovKind::Telephoto));
    assert_eq!(TokenKind::Sony.spec().field_of_view, Some(FovKind::Wide));
    assert_eq!(TokenKind::KeyLight.spec().field_of_view, Some(FovKind::Light));
    assert_eq!(TokenKind::FillLight.spec().field_of_view, Some(FovKind::Light));
    assert!(TokenKind::Host.spec().cone().is_none());
}

#[test]
fn lookup_resolves_known_tag() {
    let spec = lookup("table").unwrap();
    assert_eq!(spec.kind, TokenKind::Table);
    assert_eq!(spec.label, "TABLE");
}

#[test]
fn lookup_rejects_unknown_tag() {
    assert!(matches!(lookup("tripod"), Err(PlannerError::UnknownType(_))));
}

#[test]
fn fill_solid_detection() {
    assert!(TokenKind::Iphone.spec().fill.is_solid());
    assert!(!TokenKind::Host.spec().fill.is_solid());
}

// =============================================================
// Cones
// =============================================================

#[test]
fn cone_apex_sits_at_frame_center() {
    for fov in [FovKind::Telephoto, FovKind::Wide, FovKind::Light] {
        let cone = fov.cone();
        assert_eq!(cone.points[0], (cone.size / 2.0, cone.size / 2.0));
        assert_eq!(cone.points_from_apex()[0], (0.0, 0.0));
    }
}

#[test]
fn cone_opens_toward_positive_x() {
    for fov in [FovKind::Telephoto, FovKind::Wide, FovKind::Light] {
        let [_, a, b] = fov.cone().points_from_apex();
        assert!(a.0 > 0.0 && b.0 > 0.0);
        assert!(a.1 < 0.0 && b.1 > 0.0, "{fov:?} straddles the axis");
    }
}

#[test]
fn cone_reach_is_half_size() {
    assert_eq!(FovKind::Telephoto.cone().reach(), 125.0);
    assert_eq!(FovKind::Wide.cone().reach(), 200.0);
    assert_eq!(FovKind::Light.cone().reach(), 150.0);
}

#[test]
fn cone_gradient_fades_to_transparent() {
    for fov in [FovKind::Telephoto, FovKind::Wide, FovKind::Light] {
        assert!(fov.cone().gradient[2].ends_with(", 0)"));
    }
}

// =============================================================
// Palette
// =============================================================

#[test]
fn palette_lists_every_kind_once() {
    let mut seen: Vec<TokenKind> = palette().iter().flat_map(|g| g.kinds.iter().copied()).collect();
    assert_eq!(seen.len(), TokenKind::ALL.len());
    seen.sort_by_key(|k| k.tag());
    seen.dedup();
    assert_eq!(seen.len(), TokenKind::ALL.len());
}

#[test]
fn palette_groups_agree_with_records() {
    for section in palette() {
        for kind in section.kinds {
            assert_eq!(kind.spec().group, section.group);
        }
    }
}

#[test]
fn palette_order_and_headings() {
    let headings: Vec<&str> = palette().iter().map(|g| g.group.heading()).collect();
    assert_eq!(headings, ["People", "Cameras", "Lights", "Furniture"]);
    assert_eq!(palette()[1].kinds, &[TokenKind::Sony, TokenKind::Iphone]);
}
