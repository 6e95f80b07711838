use super::*;

fn frame(w: u32, h: u32) -> FrameRGBA {
    let mut f = FrameRGBA::transparent(w, h);
    for px in f.data.chunks_exact_mut(4) {
        px.copy_from_slice(&[64, 0, 0, 128]);
    }
    f
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("beamline-sink-{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn in_memory_sink_collects_in_order() {
    let mut sink = InMemorySink::new();
    let cfg = SinkConfig {
        width: 2,
        height: 1,
        fps: 30,
    };
    sink.begin(cfg).unwrap();
    sink.push_frame(0, &frame(2, 1)).unwrap();
    sink.push_frame(1, &frame(2, 1)).unwrap();
    sink.end().unwrap();

    assert_eq!(sink.config(), Some(cfg));
    assert!(sink.is_finished());
    let idx: Vec<u64> = sink.frames.iter().map(|(i, _)| *i).collect();
    assert_eq!(idx, vec![0, 1]);

    sink.begin(cfg).unwrap();
    assert!(sink.frames.is_empty());
    assert!(!sink.is_finished());
}

#[test]
fn png_sink_writes_straight_alpha() {
    let dir = scratch_dir("png");
    let mut sink = PngSequenceSink::new(&dir);
    sink.begin(SinkConfig {
        width: 2,
        height: 2,
        fps: 10,
    })
    .unwrap();
    sink.push_frame(3, &frame(2, 2)).unwrap();
    sink.end().unwrap();

    assert_eq!(sink.written(), &[dir.join("frame_00003.png")]);
    let img = image::open(&sink.written()[0]).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (2, 2));
    assert_eq!(img.get_pixel(0, 0).0, [128, 0, 0, 128]);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn png_sink_rejects_misuse() {
    let dir = scratch_dir("misuse");
    let mut sink = PngSequenceSink::new(&dir);
    assert!(sink.push_frame(0, &frame(1, 1)).is_err());

    sink.begin(SinkConfig {
        width: 4,
        height: 4,
        fps: 10,
    })
    .unwrap();
    let err = sink.push_frame(0, &frame(1, 1)).unwrap_err();
    assert!(matches!(err, BeamError::Render(_)));
    assert!(sink.written().is_empty());

    let _ = std::fs::remove_dir_all(&dir);
}
