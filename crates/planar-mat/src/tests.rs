use approx::assert_relative_eq;
use ndarray::ShapeBuilder;

use super::*;

fn bgr() -> Mat {
    // 2x3 image, pixel (r, c) = [10r + c, 100 + 10r + c, 200 + 10r + c]
    let data = (0..2)
        .flat_map(|r| (0..3).flat_map(move |c| [10 * r + c, 100 + 10 * r + c, 200 + 10 * r + c]))
        .map(|v| v as u8)
        .collect::<Vec<_>>();
    Mat::from_vec(2, 3, 3, data)
}

#[test]
fn empty() {
    let mat = Mat::default();
    assert!(mat.is_empty());
    assert_eq!(mat.dims(), 0);
    assert_eq!(mat.type_name(), "CV_8U");

    // Zero-sized but typed matrices are empty too.
    let mat = Mat::new(0, 5, MatType::new(Depth::F32, 3));
    assert!(mat.is_empty());
    assert_eq!(mat.channels(), 3);
    assert_eq!(mat.depth(), Depth::F32);
}

#[test]
fn new_is_zeroed() {
    let mat = Mat::new(2, 3, MatType::new(Depth::S32, 2));
    assert_eq!(mat.rows(), 2);
    assert_eq!(mat.cols(), 3);
    assert_eq!(mat.dims(), 2);
    assert_eq!(mat.type_code(), 12);
    assert_eq!(mat.type_name(), "CV_32SC2");
    assert_eq!(mat.data::<i32>(), Some(&[0; 12][..]));
    assert_eq!(mat.data::<f32>(), None);
}

#[test]
fn sample_access() {
    let mut mat = bgr();
    assert_eq!(mat.at::<u8>(0, 0, 0), 0);
    assert_eq!(mat.at::<u8>(0, 2, 1), 102);
    assert_eq!(mat.at::<u8>(1, 1, 2), 211);

    mat.data_mut::<u8>().unwrap()[0] = 42;
    assert_eq!(mat.at::<u8>(0, 0, 0), 42);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn sample_access_out_of_bounds() {
    bgr().at::<u8>(2, 0, 0);
}

#[test]
#[should_panic(expected = "incorrect sample count")]
fn wrong_length() {
    Mat::from_vec(2, 2, 3, vec![0u8; 11]);
}

#[test]
fn convert() {
    let mat = Mat::from_vec(1, 4, 1, vec![-1.6f32, 0.4, 254.5, 300.0]);

    let u8s = mat.convert_to(Depth::U8);
    assert_eq!(u8s.depth(), Depth::U8);
    assert_eq!(u8s.data::<u8>(), Some(&[0, 0, 255, 255][..]));

    let s32s = mat.convert_to(Depth::S32);
    assert_eq!(s32s.data::<i32>(), Some(&[-2, 0, 255, 300][..]));

    let f64s = bgr().convert_to(Depth::F64);
    assert_eq!(f64s.channels(), 3);
    assert_eq!(f64s.at::<f64>(1, 2, 2), 212.0);

    assert_eq!(Mat::from_vec(1, 1, 1, vec![f32::NAN]).to_vec::<u8>(), [0]);
}

#[test]
fn split_merge() {
    let mat = bgr();
    let planes = mat.split();
    assert_eq!(planes.len(), 3);
    for (k, plane) in planes.iter().enumerate() {
        assert_eq!(plane.channels(), 1);
        assert_eq!(plane.rows(), 2);
        assert_eq!(plane.cols(), 3);
        assert_eq!(plane.at::<u8>(1, 2, 0), 100 * k as u8 + 12);
    }
    assert_eq!(planes[1].data::<u8>(), Some(&[100, 101, 102, 110, 111, 112][..]));

    assert_eq!(Mat::merge(&planes), mat);

    let reversed = planes.iter().rev().cloned().collect::<Vec<_>>();
    let rgb = Mat::merge(&reversed);
    assert_eq!(rgb.at::<u8>(0, 1, 0), 201);
    assert_eq!(rgb.at::<u8>(0, 1, 2), 1);
}

#[test]
#[should_panic(expected = "cannot merge")]
fn merge_mismatched() {
    let a = Mat::new(2, 2, MatType::new(Depth::U8, 1));
    let b = Mat::new(2, 2, MatType::new(Depth::F32, 1));
    Mat::merge(&[a, b]);
}

#[test]
fn stats() {
    assert_eq!(Mat::empty().stats(), None);

    let stats = bgr().stats().unwrap();
    assert_eq!(stats.min, 0.0);
    assert_eq!(stats.max, 212.0);
    // Channel means are 6, 106 and 206.
    assert_relative_eq!(stats.mean, 106.0);

    let single = Mat::from_vec(1, 1, 1, vec![-3.5f64]).stats().unwrap();
    assert_eq!((single.min, single.max, single.mean), (-3.5, -3.5, -3.5));

    env_logger::builder().is_test(true).try_init().ok();
    let image = bgr();
    crate::mstats!(image);
    crate::mstats!(Mat::empty());
}

#[test]
fn array_view() {
    let mut mat = bgr();
    let view = mat.view::<u8>().unwrap();
    assert_eq!(view.dim(), (2, 3, 3));
    assert_eq!(view[[1, 2, 1]], 112);
    assert!(mat.view::<f32>().is_none());

    mat.view_mut::<u8>().unwrap()[[0, 1, 2]] = 7;
    assert_eq!(mat.data::<u8>().unwrap()[5], 7);

    // Column-major arrays are stored row-major.
    let fortran = ndarray::Array3::from_shape_vec((2, 2, 1).f(), vec![1i16, 2, 3, 4]).unwrap();
    let mat = Mat::from_array(fortran);
    assert_eq!((mat.rows(), mat.cols(), mat.channels()), (2, 2, 1));
    assert_eq!(mat.data::<i16>(), Some(&[1, 3, 2, 4][..]));
}

#[test]
fn top_left() {
    assert_eq!(
        stats::top_left_rows(&bgr()),
        [
            "[0, 100, 200] [1, 101, 201] [2, 102, 202]",
            "[10, 110, 210] [11, 111, 211] [12, 112, 212]",
        ]
    );

    // Only the top-left 3x3 pixels are logged.
    let wide = Mat::from_vec(4, 5, 1, (0..20).map(|v| v as f32 * 0.5).collect());
    assert_eq!(
        stats::top_left_rows(&wide),
        ["[0] [0.5] [1]", "[2.5] [3] [3.5]", "[5] [5.5] [6]"]
    );

    env_logger::builder().is_test(true).try_init().ok();
    crate::mtop!(wide);
    crate::mtop!(Mat::empty());
}
