use crate::config::TestOptions;

pub const ESTIMATED_FIRST_FRAME_LATENCY: &str = "estimatedFirstFrameLatency";
pub const ESTIMATED_ANY_FRAME_LATENCY: &str = "estimatedAnyFrameLatency";

pub struct KeyColor {
    pub label: &'static str,
    pub red: (u8, u8),
    pub green: (u8, u8),
    pub blue: (u8, u8),
    pub fraction: f64,
}

pub const KEY_COLORS: &[KeyColor] = &[
    KeyColor {
        label: "poster",
        red: (0, 128),
        green: (220, 255),
        blue: (220, 255),
        fraction: 0.8,
    },
    KeyColor {
        label: "firstFrame",
        red: (220, 255),
        green: (0, 60),
        blue: (0, 60),
        fraction: 0.8,
    },
    KeyColor {
        label: "secondFrame",
        red: (0, 60),
        green: (0, 60),
        blue: (220, 255),
        fraction: 0.8,
    },
    KeyColor {
        label: "lastFrame",
        red: (220, 255),
        green: (220, 255),
        blue: (0, 128),
        fraction: 0.8,
    },
];

pub const TRACKED_METRICS: &[&str] = &[
    "poster",
    "posterEnd",
    "firstFrame",
    "secondFrame",
    "lastFrame",
    ESTIMATED_FIRST_FRAME_LATENCY,
    ESTIMATED_ANY_FRAME_LATENCY,
];

// Milestones tried in order when estimating when the first frame appeared.
pub const FIRST_FRAME_PRIORITY: &[&str] = &["firstFrame", "posterEnd", "secondFrame", "lastFrame"];

pub fn modify_command(cmd: &mut Vec<String>, test: &TestOptions) {
    for color in KEY_COLORS {
        cmd.push("--visualMetricsKeyColor".to_string());
        cmd.push(color.label.to_string());
        for bound in [
            color.red.0,
            color.red.1,
            color.green.0,
            color.green.1,
            color.blue.0,
            color.blue.1,
        ] {
            cmd.push(bound.to_string());
        }
        cmd.push(color.fraction.to_string());
    }

    cmd.push("--chrome.enableVideoAutoplay".to_string());
    cmd.push("true".to_string());

    if let Some(fps) = test.fps_override() {
        cmd.push("--visualMetricsKeyColorFrameRate".to_string());
        cmd.push(fps.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_key_color_tokens() {
        let mut cmd = vec!["browsertime".to_string()];
        modify_command(&mut cmd, &TestOptions::default());

        assert_eq!(cmd[0], "browsertime");
        assert_eq!(cmd[1], "--visualMetricsKeyColor");
        assert_eq!(cmd[2], "poster");
        assert_eq!(cmd[3..9], ["0", "128", "220", "255", "220", "255"]);
        assert_eq!(cmd[9], "0.8");

        let autoplay = cmd
            .iter()
            .position(|t| t == "--chrome.enableVideoAutoplay")
            .unwrap();
        assert_eq!(cmd[autoplay + 1], "true");

        // 9 tokens per key color, autoplay flag and value, no frame rate override
        assert_eq!(cmd.len(), 1 + KEY_COLORS.len() * 9 + 2);
    }

    #[test]
    fn appends_frame_rate_override_when_configured() {
        let test: TestOptions = serde_json::from_str(r#"{"fps": 60.0}"#).unwrap();
        let mut cmd = Vec::new();
        modify_command(&mut cmd, &test);

        let flag = cmd
            .iter()
            .position(|t| t == "--visualMetricsKeyColorFrameRate")
            .unwrap();
        assert_eq!(cmd[flag + 1], "60");
    }

    #[test]
    fn every_tracked_label_has_a_key_color_or_is_derived() {
        for color in KEY_COLORS {
            assert!(TRACKED_METRICS.contains(&color.label));
        }
        for label in FIRST_FRAME_PRIORITY {
            assert!(TRACKED_METRICS.contains(label));
        }
    }
}
