use std::io::{Cursor, Write};

use voidh_flac::blocks::PictureType;
use voidh_flac::{decode_stream, BlockType, DecodeError, DecodeOptions, MetadataBlockData, Stream};

mod common;

fn decode(data: &[u8]) -> Result<Stream, DecodeError> {
    decode_stream(Cursor::new(data), &DecodeOptions::default())
}

fn cover_flac() -> Vec<u8> {
    common::flac(&[
        common::block(false, 0, &common::stream_info(44100, 2, 16, 88200)),
        common::block(
            false,
            6,
            &common::picture(3, "image/jpeg", "", 1920, 1080, &[0xff, 0xd8, 0xff, 0xe0]),
        ),
        common::block(true, 1, &[0; 16]),
    ])
}

#[test]
fn decode_minimal_stream() {
    let stream = decode(&common::minimal_flac()).unwrap();
    assert_eq!(stream.metadata_blocks.len(), 1);
    assert!(stream.frames.is_empty());

    let block = &stream.metadata_blocks[0];
    assert!(block.is_last);
    assert_eq!(block.length, 34);
    assert_eq!(block.block_type(), BlockType::StreamInfo);
}

#[test]
fn invalid_magic_number() {
    let mut data = common::minimal_flac();
    data[..4].copy_from_slice(b"fLaD");
    match decode(&data) {
        Err(DecodeError::InvalidTag {
            offset,
            expected,
            actual,
        }) => {
            assert_eq!(offset, 0);
            assert_eq!(expected, vec![0x66, 0x4c, 0x61, 0x63]);
            assert_eq!(actual, b"fLaD".to_vec());
        }
        other => panic!("expected InvalidTag, got {:?}", other),
    }
}

#[test]
fn too_short_for_magic_number() {
    assert!(decode(b"fL").unwrap_err().is_truncated());
}

#[test]
fn cover_picture_fixture() {
    let stream = decode(&cover_flac()).unwrap();
    assert!(stream.metadata_blocks.len() >= 2);
    assert_eq!(stream.metadata_blocks[0].block_type(), BlockType::StreamInfo);

    let info = stream.stream_info().unwrap();
    assert_eq!(info.sample_rate, 44100);
    assert_eq!(info.channels, 2);
    assert_eq!(info.bits_per_sample, 16);
    assert_eq!(info.total_samples, 88200);

    let pictures: Vec<_> = stream.pictures().collect();
    assert_eq!(pictures.len(), 1);
    let picture = pictures[0];
    assert_eq!(picture.picture_type, PictureType::CoverFront);
    assert!(picture.picture_type.is_cover());
    assert_eq!(picture.mime_type, "image/jpeg");
    assert_eq!(picture.width, 1920);
    assert_eq!(picture.height, 1080);
    assert_eq!(picture.data, vec![0xff, 0xd8, 0xff, 0xe0]);

    let last = stream.metadata_blocks.last().unwrap();
    assert!(last.is_last);
    assert_eq!(last.data, MetadataBlockData::Padding(16));
    assert_eq!(stream.metadata_blocks.iter().filter(|b| b.is_last).count(), 1);
}

#[test]
fn decoding_is_repeatable() {
    let data = cover_flac();
    assert_eq!(decode(&data).unwrap(), decode(&data).unwrap());
}

#[test]
fn first_block_must_be_stream_info() {
    let data = common::flac(&[
        common::block(false, 1, &[0; 4]),
        common::block(true, 0, &common::stream_info(44100, 2, 16, 0)),
    ]);
    assert!(matches!(decode(&data), Err(DecodeError::InvalidFirstBlock)));
}

#[test]
fn duplicate_stream_info() {
    let info = common::stream_info(44100, 2, 16, 0);
    let data = common::flac(&[common::block(false, 0, &info), common::block(true, 0, &info)]);
    assert!(matches!(decode(&data), Err(DecodeError::DuplicateStreamInfo)));
}

#[test]
fn missing_last_block_is_truncation() {
    let data = common::flac(&[common::block(false, 0, &common::stream_info(44100, 2, 16, 0))]);
    assert!(decode(&data).unwrap_err().is_truncated());
}

#[test]
fn truncated_block_body() {
    let mut data = common::minimal_flac();
    data.truncate(data.len() - 3);
    assert!(matches!(decode(&data), Err(DecodeError::UnexpectedEndOfInput(_))));
}

#[test]
fn invalid_block_types() {
    for block_type in [7u8, 42, 126, 127] {
        let data = common::flac(&[
            common::block(false, 0, &common::stream_info(44100, 2, 16, 0)),
            common::block(true, block_type, &[0; 4]),
        ]);
        match decode(&data) {
            Err(DecodeError::InvalidMetadataBlockType(t)) => assert_eq!(t, block_type),
            other => panic!("expected InvalidMetadataBlockType, got {:?}", other),
        }
    }
}

#[test]
fn stream_info_length_mismatch() {
    let info = common::stream_info(44100, 2, 16, 0);
    let data = common::flac(&[common::block_with_length(true, 0, 30, &info)]);
    match decode(&data) {
        Err(DecodeError::LengthMismatch { declared, actual }) => {
            assert_eq!(declared, 30);
            assert_eq!(actual, 34);
        }
        other => panic!("expected LengthMismatch, got {:?}", other),
    }
}

#[test]
fn application_block() {
    let data = common::flac(&[
        common::block(false, 0, &common::stream_info(44100, 2, 16, 0)),
        common::block(true, 2, &[0, 0x99, 0x99, 0xff, 255]),
    ]);
    let stream = decode(&data).unwrap();
    let block = &stream.metadata_blocks[1];
    assert!(block.is_last);
    assert_eq!(block.length, 5);
    match &block.data {
        MetadataBlockData::Application(app) => {
            assert_eq!(app.application_id, 0x009999ff);
            assert_eq!(app.data, vec![255]);
        }
        other => panic!("expected Application, got {:?}", other),
    }
}

#[test]
fn application_block_shorter_than_id() {
    let data = common::flac(&[
        common::block(false, 0, &common::stream_info(44100, 2, 16, 0)),
        common::block_with_length(true, 2, 2, &[0, 0x99, 0x99, 0xff]),
    ]);
    assert!(matches!(
        decode(&data),
        Err(DecodeError::LengthMismatch {
            declared: 2,
            actual: 4
        })
    ));
}

#[test]
fn seek_table_block() {
    let data = common::flac(&[
        common::block(false, 0, &common::stream_info(44100, 1, 16, 44100)),
        common::block(
            true,
            3,
            &common::seek_table(&[(0, 0, 4608), (0xFFFFFFFFFFFFFFFF, 0, 0)]),
        ),
    ]);
    let stream = decode(&data).unwrap();
    match &stream.metadata_blocks[1].data {
        MetadataBlockData::SeekTable(table) => {
            assert_eq!(table.seek_points.len(), 2);
            assert_eq!(table.seek_points[0].sample_number, 0);
            assert_eq!(table.seek_points[0].stream_offset, 0);
            assert_eq!(table.seek_points[0].frame_samples, 4608);
            assert!(!table.seek_points[0].is_placeholder());
            assert!(table.seek_points[1].is_placeholder());
        }
        other => panic!("expected SeekTable, got {:?}", other),
    }
}

#[test]
fn seek_table_with_partial_point() {
    let mut body = common::seek_table(&[(0, 0, 4608), (4608, 1200, 4608)]);
    body.truncate(20);
    let mut data = common::flac(&[
        common::block(false, 0, &common::stream_info(44100, 1, 16, 44100)),
        common::block(true, 3, &body),
    ]);
    // trailing bytes so the second point can be read past the declared length
    data.extend_from_slice(&[0; 16]);
    assert!(matches!(
        decode(&data),
        Err(DecodeError::LengthMismatch {
            declared: 20,
            actual: 36
        })
    ));
}

#[test]
fn skip_metadata() {
    let stream = decode_stream(Cursor::new(cover_flac()), &DecodeOptions::skip_metadata()).unwrap();
    assert!(stream.metadata_blocks.is_empty());
    assert!(stream.frames.is_empty());
}

#[test]
fn skip_metadata_still_validates_chain() {
    let data = common::flac(&[common::block(false, 0, &common::stream_info(44100, 2, 16, 0))]);
    let result = decode_stream(Cursor::new(data), &DecodeOptions::skip_metadata());
    assert!(result.unwrap_err().is_truncated());
}

#[test]
fn frames_are_not_decoded() {
    let options = DecodeOptions {
        metadata: true,
        frames: true,
    };
    let stream = decode_stream(Cursor::new(cover_flac()), &options).unwrap();
    assert_eq!(stream.metadata_blocks.len(), 3);
    assert!(stream.frames.is_empty());
}

#[test]
fn options_from_toml() {
    let options: DecodeOptions = toml::from_str("frames = true").unwrap();
    assert!(options.metadata);
    assert!(options.frames);

    let options: DecodeOptions = toml::from_str("metadata = false").unwrap();
    assert_eq!(options, DecodeOptions::skip_metadata());

    let options: DecodeOptions = toml::from_str("").unwrap();
    assert_eq!(options, DecodeOptions::default());
}

#[test]
fn stream_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&cover_flac()).unwrap();
    file.flush().unwrap();

    let stream = Stream::from_file(file.path(), &DecodeOptions::default()).unwrap();
    assert_eq!(stream.blocks_of(BlockType::Picture).count(), 1);
    assert_eq!(stream.blocks_of(BlockType::Padding).count(), 1);
    assert!(stream.comments().is_none());
}

#[test]
fn missing_file_is_not_truncation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.flac");
    match Stream::from_file(&path, &DecodeOptions::default()) {
        Err(err @ DecodeError::OpenFile { .. }) => {
            assert!(!err.is_truncated());
            if let DecodeError::OpenFile { path: p, source } = err {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
        }
        other => panic!("expected OpenFile, got {:?}", other),
    }
}
