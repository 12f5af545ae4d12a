//! # 统计分析模块
//!
//! 图像灰度直方图、香农熵和颜色多样性的度量。比较原图和可疑图
//! 的指标可以发现 LSB 写入留下的统计痕迹。

use image::{Pixel, RgbImage};
use std::collections::HashMap;

/// 一幅图像的统计指标。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageStats {
    /// 灰度直方图的香农熵，单位是比特，取值 0.0 到 8.0
    pub entropy: f64,
    /// 不同 RGB 颜色的数量
    pub distinct_colors: usize,
}

/// 原图与可疑图的对比报告。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisReport {
    pub original: ImageStats,
    pub suspect: ImageStats,
    /// 两幅图灰度直方图的 L1 距离 (各桶计数差的绝对值之和)
    pub histogram_distance: u64,
    /// 可疑图的熵高于原图
    pub entropy_increased: bool,
}

/// 对比原图和可疑图的统计指标。
pub fn compare(original: &RgbImage, suspect: &RgbImage) -> AnalysisReport {
    let original_histogram = grayscale_histogram(original);
    let suspect_histogram = grayscale_histogram(suspect);

    let original = ImageStats {
        entropy: shannon_entropy(&original_histogram),
        distinct_colors: distinct_colors(original),
    };
    let suspect = ImageStats {
        entropy: shannon_entropy(&suspect_histogram),
        distinct_colors: distinct_colors(suspect),
    };

    AnalysisReport {
        original,
        suspect,
        histogram_distance: original_histogram
            .iter()
            .zip(&suspect_histogram)
            .map(|(&a, &b)| a.abs_diff(b))
            .sum(),
        entropy_increased: suspect.entropy > original.entropy,
    }
}

/// 按亮度把像素归入 256 个桶。
pub fn grayscale_histogram(image: &RgbImage) -> [u64; 256] {
    let mut histogram = [0u64; 256];
    for pixel in image.pixels() {
        let level = pixel.to_luma().0[0];
        histogram[level as usize] += 1;
    }
    histogram
}

/// 直方图的香农熵 (底为 2)。空直方图的熵是零。
pub fn shannon_entropy(histogram: &[u64; 256]) -> f64 {
    let total: u64 = histogram.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    histogram
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// 完整的 RGB 颜色频次分布。
pub fn color_distribution(image: &RgbImage) -> HashMap<[u8; 3], u64> {
    let mut colors = HashMap::new();
    for pixel in image.pixels() {
        *colors.entry(pixel.0).or_insert(0) += 1;
    }
    colors
}

/// 图像里不同 RGB 颜色的数量。
pub fn distinct_colors(image: &RgbImage) -> usize {
    color_distribution(image).len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steganography::embed_bits;
    use image::Rgb;

    #[test]
    fn histogram_buckets_by_luma() {
        let mut image = RgbImage::new(2, 1);
        image.put_pixel(0, 0, Rgb([0, 0, 0]));
        image.put_pixel(1, 0, Rgb([255, 255, 255]));

        let histogram = grayscale_histogram(&image);
        assert_eq!(histogram[0], 1);
        assert_eq!(histogram[255], 1);
        assert_eq!(histogram.iter().sum::<u64>(), 2);
    }

    #[test]
    fn uniform_histogram_entropy_is_eight() {
        let histogram = [4u64; 256];
        assert!((shannon_entropy(&histogram) - 8.0).abs() < 1e-9);
    }

    #[test]
    fn single_level_entropy_is_zero() {
        let mut histogram = [0u64; 256];
        histogram[7] = 1234;
        assert_eq!(shannon_entropy(&histogram), 0.0);
    }

    #[test]
    fn empty_histogram_entropy_is_zero() {
        assert_eq!(shannon_entropy(&[0u64; 256]), 0.0);
    }

    #[test]
    fn even_split_entropy_is_one_bit() {
        let image = RgbImage::from_fn(16, 16, |x, y| {
            if (x + y) % 2 == 0 {
                Rgb([0, 0, 0])
            } else {
                Rgb([255, 255, 255])
            }
        });
        let entropy = shannon_entropy(&grayscale_histogram(&image));
        assert!((entropy - 1.0).abs() < 1e-9);
    }

    #[test]
    fn color_distribution_counts_every_pixel() {
        let image = RgbImage::from_fn(8, 8, |x, _| match x % 4 {
            0 => Rgb([255, 0, 0]),
            1 => Rgb([0, 255, 0]),
            2 => Rgb([0, 0, 255]),
            _ => Rgb([9, 9, 9]),
        });

        let distribution = color_distribution(&image);
        assert_eq!(distribution.len(), 4);
        assert_eq!(distribution[&[255, 0, 0]], 16);
        assert_eq!(distribution[&[9, 9, 9]], 16);
        assert_eq!(distinct_colors(&image), 4);
    }

    #[test]
    fn identical_images_compare_clean() {
        let image = RgbImage::from_fn(16, 16, |x, y| Rgb([x as u8, y as u8, 200]));
        let report = compare(&image, &image);

        assert_eq!(report.histogram_distance, 0);
        assert!(!report.entropy_increased);
        assert_eq!(report.original, report.suspect);
    }

    #[test]
    fn embedding_raises_entropy_of_flat_image() {
        let original = RgbImage::from_pixel(64, 64, Rgb([128, 128, 128]));
        let mut suspect = original.clone();
        // 连续 24 个 1 位把前 8 个像素抬到 (129, 129, 129)
        embed_bits(&mut suspect, &[1; 24]).unwrap();

        let report = compare(&original, &suspect);
        assert_eq!(report.original.entropy, 0.0);
        assert_eq!(report.original.distinct_colors, 1);
        assert!(report.entropy_increased);
        assert_eq!(report.suspect.distinct_colors, 2);
        // 8 个像素换了亮度桶，两边直方图各差 8
        assert_eq!(report.histogram_distance, 16);
    }
}
