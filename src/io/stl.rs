// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! STL reading and writing.
//!
//! A buffer is treated as binary STL when its length is exactly
//! `84 + 50 * count`, `count` being the little-endian `u32` at offset 80;
//! anything else is parsed as ASCII. Normals stored in the file are ignored
//! and recomputed from the vertices.

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::Path,
};

use log::{debug, trace};
use rayon::{ThreadPoolBuilder, prelude::*};

use crate::{
    geometry::{Aabb, Point3, Triangle, Vector3},
    numeric::scalar::Scalar,
};

const HEADER_LEN: usize = 80;
const PREFIX_LEN: usize = HEADER_LEN + 4;
const RECORD_LEN: usize = 50;

#[derive(Debug, Clone, Default)]
pub struct StlReadOptions {
    /// Worker threads for binary parsing; defaults to rayon's global
    /// thread count.
    pub workers: Option<usize>,
}

impl StlReadOptions {
    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }
}

/// Triangles loaded from STL with per-triangle normals and overall bounds.
#[derive(Debug, Clone)]
pub struct StlMesh<T: Scalar> {
    pub triangles: Vec<Triangle<T>>,
    pub normals: Vec<Vector3<T>>,
    pub bounds: Option<Aabb<T, 3>>,
}

pub fn read_stl<T: Scalar, P: AsRef<Path>>(
    path: P,
    options: &StlReadOptions,
) -> io::Result<StlMesh<T>> {
    let bytes = fs::read(path)?;
    read_stl_bytes(&bytes, options)
}

pub fn read_stl_bytes<T: Scalar>(bytes: &[u8], options: &StlReadOptions) -> io::Result<StlMesh<T>> {
    if is_binary_stl(bytes) {
        read_binary(bytes, options)
    } else {
        read_ascii(bytes)
    }
}

pub fn is_binary_stl(bytes: &[u8]) -> bool {
    if bytes.len() < PREFIX_LEN {
        return false;
    }
    let expected = binary_count(bytes) as u64 * RECORD_LEN as u64 + PREFIX_LEN as u64;
    expected == bytes.len() as u64
}

fn binary_count(bytes: &[u8]) -> u32 {
    let mut raw = [0u8; 4];
    raw.copy_from_slice(&bytes[HEADER_LEN..PREFIX_LEN]);
    u32::from_le_bytes(raw)
}

fn read_f32(bytes: &[u8], at: usize) -> f32 {
    let mut raw = [0u8; 4];
    raw.copy_from_slice(&bytes[at..at + 4]);
    f32::from_le_bytes(raw)
}

fn read_point<T: Scalar>(record: &[u8], at: usize) -> Point3<T> {
    Point3::new([0, 1, 2].map(|k| T::from_f32_lossy(read_f32(record, at + 4 * k))))
}

struct WorkerOutput<T: Scalar> {
    items: Vec<(Triangle<T>, Vector3<T>)>,
    bounds: Option<Aabb<T, 3>>,
}

/// Parses records `worker, worker + workers, worker + 2 * workers, ...`.
fn parse_strided<T: Scalar>(
    records: &[u8],
    count: usize,
    worker: usize,
    workers: usize,
) -> WorkerOutput<T> {
    let mut items = Vec::with_capacity(count / workers + 1);
    let mut bounds: Option<Aabb<T, 3>> = None;

    for i in (worker..count).step_by(workers) {
        let record = &records[i * RECORD_LEN..(i + 1) * RECORD_LEN];
        // bytes 0..12 hold the stored normal
        let triangle = Triangle::new(
            read_point(record, 12),
            read_point(record, 24),
            read_point(record, 36),
        );
        let tb = triangle.bounds();
        bounds = Some(match bounds {
            Some(b) => b.union(&tb),
            None => tb,
        });
        items.push((triangle, triangle.normal()));
    }

    trace!("STL worker {}: {} triangles", worker, items.len());
    WorkerOutput { items, bounds }
}

fn read_binary<T: Scalar>(bytes: &[u8], options: &StlReadOptions) -> io::Result<StlMesh<T>> {
    let count = binary_count(bytes) as usize;
    let records = &bytes[PREFIX_LEN..];
    let workers = options
        .workers
        .unwrap_or_else(rayon::current_num_threads)
        .clamp(1, count.max(1));

    debug!("reading binary STL: {} triangles on {} workers", count, workers);

    let pool = ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|e| io::Error::other(format!("STL: cannot start worker pool: {e}")))?;
    let partials: Vec<WorkerOutput<T>> = pool.install(|| {
        (0..workers)
            .into_par_iter()
            .map(|w| parse_strided(records, count, w, workers))
            .collect()
    });

    let mut triangles = Vec::with_capacity(count);
    let mut normals = Vec::with_capacity(count);
    for i in 0..count {
        let (triangle, normal) = partials[i % workers].items[i / workers];
        triangles.push(triangle);
        normals.push(normal);
    }

    let bounds = partials
        .iter()
        .filter_map(|p| p.bounds)
        .reduce(|a, b| a.union(&b));

    Ok(StlMesh {
        triangles,
        normals,
        bounds,
    })
}

fn read_ascii<T: Scalar>(bytes: &[u8]) -> io::Result<StlMesh<T>> {
    let text = std::str::from_utf8(bytes).map_err(|e| {
        io::Error::new(io::ErrorKind::InvalidData, format!("STL: not UTF-8 text: {e}"))
    })?;

    let mut corners: Vec<Point3<T>> = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let mut parts = line.split_whitespace();
        if parts.next() != Some("vertex") {
            // solid, facet, outer loop, endloop, endfacet, endsolid
            continue;
        }
        let mut coord = || -> io::Result<T> {
            let field = parts.next().ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("STL: missing vertex coordinate on line {}", line_no + 1),
                )
            })?;
            field.parse::<f64>().map(T::from_f64_lossy).map_err(|_| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("STL: bad vertex coordinate {:?} on line {}", field, line_no + 1),
                )
            })
        };
        corners.push(Point3::new([coord()?, coord()?, coord()?]));
    }

    if corners.len() % 3 != 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("STL: {} vertices do not form whole triangles", corners.len()),
        ));
    }

    let triangles: Vec<Triangle<T>> = corners
        .chunks_exact(3)
        .map(|c| Triangle::new(c[0], c[1], c[2]))
        .collect();
    let normals = triangles.iter().map(Triangle::normal).collect();
    let bounds = Aabb::enclosing(&corners);

    debug!("read ASCII STL: {} triangles", triangles.len());

    Ok(StlMesh {
        triangles,
        normals,
        bounds,
    })
}

pub fn write_stl<T: Scalar, P: AsRef<Path>>(triangles: &[Triangle<T>], path: P) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_ascii(&mut out, triangles)?;
    out.flush()
}

pub fn write_stl_binary<T: Scalar, P: AsRef<Path>>(
    triangles: &[Triangle<T>],
    path: P,
) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_binary(&mut out, triangles)?;
    out.flush()
}

pub fn write_ascii<T: Scalar, W: Write>(out: &mut W, triangles: &[Triangle<T>]) -> io::Result<()> {
    writeln!(out, "solid mesh")?;

    for t in triangles {
        let n = t.normal();
        writeln!(
            out,
            "  facet normal {} {} {}",
            n[0].to_f64_lossy(),
            n[1].to_f64_lossy(),
            n[2].to_f64_lossy()
        )?;
        writeln!(out, "    outer loop")?;
        for v in t.vertices() {
            writeln!(
                out,
                "      vertex {} {} {}",
                v[0].to_f64_lossy(),
                v[1].to_f64_lossy(),
                v[2].to_f64_lossy()
            )?;
        }
        writeln!(out, "    endloop")?;
        writeln!(out, "  endfacet")?;
    }

    writeln!(out, "endsolid mesh")
}

pub fn write_binary<T: Scalar, W: Write>(out: &mut W, triangles: &[Triangle<T>]) -> io::Result<()> {
    let count = u32::try_from(triangles.len()).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("STL: {} triangles exceed the binary format limit", triangles.len()),
        )
    })?;

    let mut header = [0u8; HEADER_LEN];
    let tag = b"binary STL";
    header[..tag.len()].copy_from_slice(tag);
    out.write_all(&header)?;
    out.write_all(&count.to_le_bytes())?;

    let mut record = [0u8; RECORD_LEN];
    for t in triangles {
        let n = t.normal();
        let values = [n.coords, t.a.coords, t.b.coords, t.c.coords];
        for (k, c) in values.iter().flatten().enumerate() {
            record[4 * k..4 * k + 4].copy_from_slice(&c.to_f32_lossy().to_le_bytes());
        }
        // attribute byte count stays zero
        out.write_all(&record)?;
    }

    Ok(())
}
