//! Decoding of `GL` status replies.

use log::warn;

use crate::errors::Error;
use crate::light::Light;
use crate::protocol::ENTRY_SEPARATOR;

type Result<T> = std::result::Result<T, Error>;

/// Parse a status reply into light records.
///
/// The reply is `<header> <entry>;<entry>;...;\r\n`. `headers` lists the
/// accepted header tokens; the longest one prefixing the reply is removed.
/// An empty reply yields no lights. Any malformed entry fails the whole
/// reply rather than being dropped.
///
/// # Examples
///
/// ```
/// use yeelight_hub_rs::parse_lights;
///
/// let lights = parse_lights("GLB 3CB8,1,1,80,255,0,0,100,0;\r\n", &["GLB", "GL"]).unwrap();
/// assert_eq!(lights.len(), 1);
/// assert_eq!(lights[0].id, "3CB8");
/// ```
pub fn parse_lights<S: AsRef<str>>(raw: &str, headers: &[S]) -> Result<Vec<Light>> {
    if raw.trim().is_empty() {
        warn!("hub sent an empty status reply");
        return Ok(Vec::new());
    }

    let body = strip_header(raw, headers)?
        .trim_end_matches(|c: char| c == ENTRY_SEPARATOR || c == '\r' || c == '\n');
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    body.split(ENTRY_SEPARATOR).map(Light::from_entry).collect()
}

fn strip_header<'a, S: AsRef<str>>(raw: &'a str, headers: &[S]) -> Result<&'a str> {
    headers
        .iter()
        .filter_map(|h| raw.strip_prefix(h.as_ref()))
        .min_by_key(|rest| rest.len())
        .map(str::trim_start)
        .ok_or_else(|| {
            Error::Protocol(format!(
                "status reply {:?} does not start with a known header",
                raw.trim_end()
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::light::LightField;

    const HEADERS: [&str; 2] = ["GLB", "GL"];

    #[test]
    fn test_two_lights() {
        let lights = parse_lights(
            "GLB 3CB8,1,1,80,255,0,0,100,0;50F5,1,0,60,0,255,0,0,0;\r\n",
            &HEADERS,
        )
        .unwrap();

        assert_eq!(
            lights,
            vec![
                Light {
                    id: "3CB8".into(),
                    kind: 1,
                    online: 1,
                    link_quality: 80,
                    red: 255,
                    green: 0,
                    blue: 0,
                    level: 100,
                    effect: 0,
                },
                Light {
                    id: "50F5".into(),
                    kind: 1,
                    online: 0,
                    link_quality: 60,
                    red: 0,
                    green: 255,
                    blue: 0,
                    level: 0,
                    effect: 0,
                },
            ]
        );
    }

    #[test]
    fn test_short_header() {
        let lights = parse_lights("GL 3CB8,1,1,80,255,0,0,100,0;\r\n", &HEADERS).unwrap();
        assert_eq!(lights.len(), 1);
        assert_eq!(lights[0].id, "3CB8");
    }

    #[test]
    fn test_header_order_does_not_matter() {
        // "GL" also prefixes "GLB"; the longer token must win.
        let lights = parse_lights("GLB 3CB8,1,1,80,255,0,0,100,0;\r\n", &["GL", "GLB"]).unwrap();
        assert_eq!(lights[0].id, "3CB8");
    }

    #[test]
    fn test_id_starting_with_header_letters() {
        let lights = parse_lights("GLB B1G2,1,1,80,1,2,3,4,0;\r\n", &HEADERS).unwrap();
        assert_eq!(lights[0].id, "B1G2");
    }

    #[test]
    fn test_without_trailing_separator() {
        let lights = parse_lights("GLB 3CB8,1,1,80,255,0,0,100,0", &HEADERS).unwrap();
        assert_eq!(lights.len(), 1);
    }

    #[test]
    fn test_empty_reply() {
        assert!(parse_lights("", &HEADERS).unwrap().is_empty());
        assert!(parse_lights("\r\n", &HEADERS).unwrap().is_empty());
    }

    #[test]
    fn test_header_only() {
        assert!(parse_lights("GLB ;\r\n", &HEADERS).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_header() {
        assert!(matches!(
            parse_lights("XX 3CB8,1,1,80,255,0,0,100,0;\r\n", &HEADERS),
            Err(Error::Protocol(_))
        ));
    }

    #[test]
    fn test_one_bad_light_fails_all() {
        let err = parse_lights(
            "GLB 3CB8,1,1,80,255,0,0,100,0;50F5,1,0,sixty,0,255,0,0,0;\r\n",
            &HEADERS,
        )
        .unwrap_err();
        assert_eq!(
            err,
            Error::Parse {
                light: "50F5".into(),
                field: LightField::LinkQuality,
                value: "sixty".into(),
            }
        );
    }

    #[test]
    fn test_truncated_entry() {
        assert!(matches!(
            parse_lights("GLB 3CB8,1,1,80,255;\r\n", &HEADERS),
            Err(Error::Protocol(_))
        ));
    }
}
