use winit::dpi::PhysicalSize;

pub(crate) fn choose_surface_format(
    caps: &wgpu::SurfaceCapabilities,
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    if prefer_srgb {
        let preferred = [
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Rgba8UnormSrgb,
        ];
        if let Some(f) = preferred.into_iter().find(|f| caps.formats.contains(f)) {
            return Some(f);
        }
    } else if let Some(f) = caps.formats.iter().copied().find(|f| !f.is_srgb()) {
        // Colors are written as given, with no linear-to-sRGB encode.
        return Some(f);
    }

    caps.formats.first().copied()
}

pub(crate) fn choose_alpha_mode(
    caps: &wgpu::SurfaceCapabilities,
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| caps.alpha_modes.contains(m))
        .or_else(|| caps.alpha_modes.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

pub(crate) fn choose_present_mode(
    caps: &wgpu::SurfaceCapabilities,
    requested: wgpu::PresentMode,
) -> wgpu::PresentMode {
    if caps.present_modes.contains(&requested) {
        requested
    } else {
        wgpu::PresentMode::Fifo
    }
}

/// Largest surface the device accepts for a window of `size`.
pub(crate) fn clamp_extent(size: PhysicalSize<u32>, max_dimension: u32) -> PhysicalSize<u32> {
    PhysicalSize::new(size.width.min(max_dimension), size.height.min(max_dimension))
}

/// Records `new_size` and reports whether the surface must be reconfigured.
///
/// wgpu rejects a 0x0 configuration, so a minimized window only updates the
/// stored size and defers configuration until it has area again. The
/// configured extent never exceeds `max_dimension` on either axis.
pub(crate) fn apply_resize(
    config: &mut wgpu::SurfaceConfiguration,
    size: &mut PhysicalSize<u32>,
    new_size: PhysicalSize<u32>,
    max_dimension: u32,
) -> bool {
    *size = new_size;
    if new_size.width == 0 || new_size.height == 0 {
        return false;
    }

    let extent = clamp_extent(new_size, max_dimension);
    config.width = extent.width;
    config.height = extent.height;
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caps(formats: Vec<wgpu::TextureFormat>) -> wgpu::SurfaceCapabilities {
        wgpu::SurfaceCapabilities {
            formats,
            present_modes: vec![wgpu::PresentMode::Fifo, wgpu::PresentMode::Mailbox],
            alpha_modes: vec![wgpu::CompositeAlphaMode::Opaque],
            ..Default::default()
        }
    }

    fn config() -> wgpu::SurfaceConfiguration {
        wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: wgpu::TextureFormat::Bgra8UnormSrgb,
            width: 1800,
            height: 900,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: wgpu::CompositeAlphaMode::Opaque,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        }
    }

    // ── surface format ────────────────────────────────────────────────────

    #[test]
    fn srgb_preferred_when_available() {
        let c = caps(vec![
            wgpu::TextureFormat::Bgra8Unorm,
            wgpu::TextureFormat::Rgba8UnormSrgb,
        ]);
        assert_eq!(
            choose_surface_format(&c, true),
            Some(wgpu::TextureFormat::Rgba8UnormSrgb)
        );
    }

    #[test]
    fn first_format_when_srgb_not_wanted() {
        let c = caps(vec![
            wgpu::TextureFormat::Bgra8Unorm,
            wgpu::TextureFormat::Bgra8UnormSrgb,
        ]);
        assert_eq!(
            choose_surface_format(&c, false),
            Some(wgpu::TextureFormat::Bgra8Unorm)
        );
    }

    #[test]
    fn non_srgb_format_chosen_when_srgb_not_wanted() {
        let c = caps(vec![
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Bgra8Unorm,
        ]);
        assert_eq!(
            choose_surface_format(&c, false),
            Some(wgpu::TextureFormat::Bgra8Unorm)
        );
    }

    #[test]
    fn srgb_only_surface_still_usable_without_preference() {
        let c = caps(vec![wgpu::TextureFormat::Rgba8UnormSrgb]);
        assert_eq!(
            choose_surface_format(&c, false),
            Some(wgpu::TextureFormat::Rgba8UnormSrgb)
        );
    }

    #[test]
    fn first_format_when_no_srgb_offered() {
        let c = caps(vec![wgpu::TextureFormat::Rgba16Float]);
        assert_eq!(
            choose_surface_format(&c, true),
            Some(wgpu::TextureFormat::Rgba16Float)
        );
    }

    #[test]
    fn no_formats_is_none() {
        assert_eq!(choose_surface_format(&caps(vec![]), true), None);
    }

    // ── alpha / present mode ──────────────────────────────────────────────

    #[test]
    fn unsupported_alpha_mode_falls_back() {
        let c = caps(vec![]);
        assert_eq!(
            choose_alpha_mode(&c, Some(wgpu::CompositeAlphaMode::PreMultiplied)),
            wgpu::CompositeAlphaMode::Opaque
        );
        assert_eq!(
            choose_alpha_mode(&c, Some(wgpu::CompositeAlphaMode::Opaque)),
            wgpu::CompositeAlphaMode::Opaque
        );
    }

    #[test]
    fn supported_present_mode_is_kept() {
        let c = caps(vec![]);
        assert_eq!(
            choose_present_mode(&c, wgpu::PresentMode::Mailbox),
            wgpu::PresentMode::Mailbox
        );
    }

    #[test]
    fn unsupported_present_mode_falls_back_to_fifo() {
        let c = caps(vec![]);
        assert_eq!(
            choose_present_mode(&c, wgpu::PresentMode::Immediate),
            wgpu::PresentMode::Fifo
        );
    }

    // ── resize ────────────────────────────────────────────────────────────

    #[test]
    fn resize_updates_config() {
        let mut cfg = config();
        let mut size = PhysicalSize::new(1800, 900);
        assert!(apply_resize(&mut cfg, &mut size, PhysicalSize::new(640, 480), 8192));
        assert_eq!((cfg.width, cfg.height), (640, 480));
        assert_eq!(size, PhysicalSize::new(640, 480));
    }

    #[test]
    fn zero_size_defers_configuration() {
        let mut cfg = config();
        let mut size = PhysicalSize::new(1800, 900);
        assert!(!apply_resize(&mut cfg, &mut size, PhysicalSize::new(0, 0), 8192));
        assert_eq!((cfg.width, cfg.height), (1800, 900));
        assert_eq!(size, PhysicalSize::new(0, 0));
    }

    #[test]
    fn oversized_window_is_capped_to_device_limit() {
        // 1800x900 logical at a 2.0 scale factor on a 2048-limited device.
        let mut cfg = config();
        let mut size = PhysicalSize::new(1800, 900);
        assert!(apply_resize(&mut cfg, &mut size, PhysicalSize::new(3600, 1800), 2048));
        assert_eq!((cfg.width, cfg.height), (2048, 1800));
        // The window size itself is still recorded unclamped.
        assert_eq!(size, PhysicalSize::new(3600, 1800));
    }

    #[test]
    fn default_limits_fit_default_window_at_double_scale() {
        let max = wgpu::Limits::default().max_texture_dimension_2d;
        let extent = clamp_extent(PhysicalSize::new(3600, 1800), max);
        assert_eq!(extent, PhysicalSize::new(3600, 1800));
    }
}
