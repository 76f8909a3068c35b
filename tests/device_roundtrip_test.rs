/// 设备数据文件往返测试
/// 要求：追加 N 条记录后重读文件，能按原顺序还原出全部字段

use std::fs;

use uwbrange::consumers::DeviceAppender;
use uwbrange::extractor::{DeviceId, RangingRecord};
use uwbrange::OutputConfig;

fn sample_records() -> Vec<RangingRecord> {
    let initiator = DeviceId::parse("11:0c").unwrap();
    let responder = DeviceId::parse("19:15").unwrap();

    vec![
        RangingRecord::new(initiator.clone(), responder.clone(), 169, 1.0),
        RangingRecord::new(initiator.clone(), responder.clone(), 0, 0.0),
        RangingRecord::new(initiator.clone(), responder.clone(), 42, -1.0),
        RangingRecord::new(initiator, responder, 3000, 0.8765),
    ]
}

#[test]
fn test_roundtrip_preserves_all_fields() {
    let dir = tempfile::tempdir().unwrap();
    let appender = DeviceAppender::new(OutputConfig::new(dir.path()));

    let records = sample_records();
    let written = appender.append_all(records.clone()).unwrap();
    assert_eq!(written, records.len());

    let content = fs::read_to_string(dir.path().join("Device[11:0c].txt")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), records.len());

    // 逐行还原四个字段并与原记录比对
    for (line, expected) in lines.iter().zip(&records) {
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields.len(), 4);

        let initiator = DeviceId::parse(fields[0]).unwrap();
        let responder = DeviceId::parse(fields[1]).unwrap();
        let distance_mm: u32 = fields[2].parse().unwrap();
        let confidence: f64 = fields[3].parse().unwrap();

        let rebuilt = RangingRecord::new(initiator, responder, distance_mm, confidence);
        assert_eq!(&rebuilt, expected);
    }
}

#[test]
fn test_roundtrip_boundary_values_survive() {
    let dir = tempfile::tempdir().unwrap();
    let appender = DeviceAppender::new(OutputConfig::new(dir.path()));

    // 距离 0 与负置信度都是合法记录
    let record = RangingRecord::new(
        DeviceId::parse("11:0c").unwrap(),
        DeviceId::parse("19:15").unwrap(),
        0,
        -1.0,
    );
    appender.append(&record).unwrap();

    let content = fs::read_to_string(dir.path().join("Device[11:0c].txt")).unwrap();
    assert_eq!(content, "11:0c,19:15,0,-1.0\n");
}
