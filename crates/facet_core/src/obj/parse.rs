//! Line-oriented parser for the Wavefront OBJ subset the engine consumes.
//!
//! Recognised records are `v`, `vt`, `vn`, `f` and `#` comments; anything
//! else (groups, materials, smoothing state) is skipped. Every malformed
//! record is a recoverable condition: it is logged, and the record (or just
//! the affected component) is dropped, never the whole parse.

use std::fs;
use std::path::Path;
use std::str::SplitWhitespace;

use glam::{Vec2, Vec3};
use log::{debug, error, warn};

/// One corner of a face, exactly as written in the file: 1-based indices,
/// negative values counting back from the end of the respective attribute
/// array. `None` marks a texcoord/normal field the corner omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceVertex {
    pub position: isize,
    pub texcoord: Option<isize>,
    pub normal: Option<isize>,
}

/// A polygon record; the parser only emits faces with at least 3 corners.
pub type Face = Vec<FaceVertex>;

/// Raw attribute arrays plus face records, in file order.
///
/// Transient: an `ObjData` only lives long enough to be handed to
/// [`crate::obj::build`], which resolves its indices into a [`crate::MeshBuffers`].
#[derive(Debug, Default)]
pub struct ObjData {
    pub positions: Vec<Vec3>,
    pub texcoords: Vec<Vec2>,
    pub normals: Vec<Vec3>,
    pub faces: Vec<Face>,
}

impl ObjData {
    /// Reads and parses the file at `path`.
    ///
    /// An unreadable file is not fatal to the host application: the error is
    /// logged and an empty `ObjData` comes back.
    pub fn from_file(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(src) => Self::parse(&src),
            Err(err) => {
                error!("cannot read mesh source {}: {err}", path.display());
                Self::default()
            }
        }
    }

    /// Parses OBJ source text.
    pub fn parse(src: &str) -> Self {
        let mut data = ObjData::default();

        for (number, raw) in src.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut tokens = line.split_whitespace();
            let Some(tag) = tokens.next() else { continue };

            match tag {
                "v" => match parse_vec3(&mut tokens) {
                    Some(p) => data.positions.push(p),
                    None => warn!("line {}: malformed position record {line:?}", number + 1),
                },
                "vt" => match parse_vec2(&mut tokens) {
                    // OBJ texture coordinates use a bottom-left origin; wgpu
                    // samples with a top-left origin, so V is flipped here
                    // and nowhere else.
                    Some(t) => data.texcoords.push(Vec2::new(t.x, 1.0 - t.y)),
                    None => warn!("line {}: malformed texcoord record {line:?}", number + 1),
                },
                "vn" => match parse_vec3(&mut tokens) {
                    Some(n) => data.normals.push(n),
                    None => warn!("line {}: malformed normal record {line:?}", number + 1),
                },
                "f" => {
                    let face: Face = tokens
                        .filter_map(|corner| {
                            let parsed = parse_face_vertex(corner);
                            if parsed.is_none() {
                                warn!("line {}: unreadable face corner {corner:?}", number + 1);
                            }
                            parsed
                        })
                        .collect();
                    if face.len() < 3 {
                        warn!(
                            "line {}: discarding face with {} corners",
                            number + 1,
                            face.len()
                        );
                    } else {
                        data.faces.push(face);
                    }
                }
                _ => debug!("line {}: skipping {tag:?} record", number + 1),
            }
        }

        data
    }
}

fn parse_vec3(tokens: &mut SplitWhitespace) -> Option<Vec3> {
    let x = tokens.next()?.parse().ok()?;
    let y = tokens.next()?.parse().ok()?;
    let z = tokens.next()?.parse().ok()?;
    Some(Vec3::new(x, y, z))
}

fn parse_vec2(tokens: &mut SplitWhitespace) -> Option<Vec2> {
    let u = tokens.next()?.parse().ok()?;
    let v = tokens.next()?.parse().ok()?;
    Some(Vec2::new(u, v))
}

/// Splits one `f`-record corner on `/`: the accepted shapes are `p`, `p/t`,
/// `p//n` and `p/t/n`. Empty or unreadable texcoord/normal fields stay
/// unset; a corner without a readable position index is unusable.
fn parse_face_vertex(token: &str) -> Option<FaceVertex> {
    let mut fields = token.split('/');
    let position = fields.next()?.parse().ok()?;
    let texcoord = fields
        .next()
        .filter(|f| !f.is_empty())
        .and_then(|f| f.parse().ok());
    let normal = fields
        .next()
        .filter(|f| !f.is_empty())
        .and_then(|f| f.parse().ok());
    Some(FaceVertex {
        position,
        texcoord,
        normal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_records_and_skips_comments() {
        let data = ObjData::parse(
            "# a comment\n\
             v 1 2 3\n\
             \n\
             vt 0.5 0.25\n\
             vn 0 1 0\n\
             usemtl ignored\n\
             f 1 1 1\n",
        );
        assert_eq!(data.positions, vec![Vec3::new(1.0, 2.0, 3.0)]);
        assert_eq!(data.normals, vec![Vec3::new(0.0, 1.0, 0.0)]);
        assert_eq!(data.faces.len(), 1);
    }

    #[test]
    fn texcoords_are_flipped_vertically() {
        let data = ObjData::parse("vt 0.5 0.25\n");
        assert_eq!(data.texcoords, vec![Vec2::new(0.5, 0.75)]);
    }

    #[test]
    fn corner_forms() {
        let data = ObjData::parse("f 1 2/3 4//5 6/7/8\n");
        let face = &data.faces[0];
        assert_eq!(
            face[0],
            FaceVertex { position: 1, texcoord: None, normal: None }
        );
        assert_eq!(
            face[1],
            FaceVertex { position: 2, texcoord: Some(3), normal: None }
        );
        assert_eq!(
            face[2],
            FaceVertex { position: 4, texcoord: None, normal: Some(5) }
        );
        assert_eq!(
            face[3],
            FaceVertex { position: 6, texcoord: Some(7), normal: Some(8) }
        );
    }

    #[test]
    fn negative_indices_survive_parsing_verbatim() {
        let data = ObjData::parse("f -1/-2/-3 -4 5\n");
        let face = &data.faces[0];
        assert_eq!(
            face[0],
            FaceVertex { position: -1, texcoord: Some(-2), normal: Some(-3) }
        );
        assert_eq!(face[1].position, -4);
    }

    #[test]
    fn short_faces_are_discarded() {
        let data = ObjData::parse("v 0 0 0\nf 1 1\n");
        assert!(data.faces.is_empty());
    }

    #[test]
    fn malformed_attribute_records_are_skipped() {
        let data = ObjData::parse("v 1 two 3\nv 4 5 6\nvt 0.1\n");
        assert_eq!(data.positions, vec![Vec3::new(4.0, 5.0, 6.0)]);
        assert!(data.texcoords.is_empty());
    }

    #[test]
    fn unreadable_corners_drop_out_of_the_face() {
        // Two broken corners leave only two usable ones: the face goes away.
        let data = ObjData::parse("f 1 x/2 y 2\n");
        assert!(data.faces.is_empty());
        // A single broken corner still leaves a valid triangle.
        let data = ObjData::parse("f 1 x 2 3\n");
        assert_eq!(data.faces[0].len(), 3);
    }

    #[test]
    fn missing_file_yields_empty_data() {
        let data = ObjData::from_file(Path::new("/definitely/not/here.obj"));
        assert!(data.positions.is_empty());
        assert!(data.faces.is_empty());
    }
}
