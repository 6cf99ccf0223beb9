use wgpu::util::DeviceExt;

use super::meshes::{screen_vertices, ScreenVertex};
use crate::core::{screen_mesh, SCREEN_WGSL};

const VIDEO_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

/// Pipeline, mesh, and video texture for the curved screen.
pub(crate) struct ScreenResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) vbuf: wgpu::Buffer,
    pub(crate) ibuf: wgpu::Buffer,
    pub(crate) num_indices: u32,
    pub(crate) bind_group: wgpu::BindGroup,
    texture: wgpu::Texture,
    texture_size: (u32, u32),
    sampler: wgpu::Sampler,
    bgl: wgpu::BindGroupLayout,
}

pub(crate) fn create_screen_resources(
    device: &wgpu::Device,
    surface_format: wgpu::TextureFormat,
    depth_format: wgpu::TextureFormat,
    uniform_bgl: &wgpu::BindGroupLayout,
) -> ScreenResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("screen_shader"),
        source: wgpu::ShaderSource::Wgsl(SCREEN_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("screen_bgl"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("screen_pl"),
        bind_group_layouts: &[uniform_bgl, &bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("screen_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_screen"),
            buffers: &[ScreenVertex::layout()],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        // The screen is visible from both sides of the cylinder segment.
        primitive: wgpu::PrimitiveState {
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: depth_format,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_screen"),
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    let mesh = screen_mesh();
    let vertices = screen_vertices(&mesh);
    let vbuf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("screen_vertices"),
        contents: bytemuck::cast_slice(&vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let ibuf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("screen_indices"),
        contents: bytemuck::cast_slice(&mesh.indices),
        usage: wgpu::BufferUsages::INDEX,
    });

    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("screen_sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    });

    // 1x1 dark placeholder until the first video frame arrives.
    let texture_size = (1, 1);
    let texture = create_video_texture(device, texture_size);
    let bind_group = create_bind_group(device, &bgl, &texture, &sampler);

    ScreenResources {
        pipeline,
        vbuf,
        ibuf,
        num_indices: mesh.indices.len() as u32,
        bind_group,
        texture,
        texture_size,
        sampler,
        bgl,
    }
}

impl ScreenResources {
    /// Pull the current video frame into the screen texture, resizing the
    /// texture on the first frame (and on any later dimension change).
    pub(crate) fn update_from_video(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        video: &web_sys::HtmlVideoElement,
        width: u32,
        height: u32,
    ) {
        if (width, height) != self.texture_size {
            self.texture_size = (width, height);
            self.texture = create_video_texture(device, self.texture_size);
            self.bind_group = create_bind_group(device, &self.bgl, &self.texture, &self.sampler);
        }
        let source = wgpu::CopyExternalImageSourceInfo {
            source: wgpu::ExternalImageSource::HTMLVideoElement(video.clone()),
            origin: wgpu::Origin2d::ZERO,
            flip_y: false,
        };
        queue.copy_external_image_to_texture(
            &source,
            wgpu::CopyExternalImageDestInfo {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
                color_space: wgpu::PredefinedColorSpace::Srgb,
                premultiplied_alpha: false,
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );
    }
}

fn create_video_texture(device: &wgpu::Device, (width, height): (u32, u32)) -> wgpu::Texture {
    device.create_texture(&wgpu::TextureDescriptor {
        label: Some("screen_video_tex"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: VIDEO_FORMAT,
        // External-image copies require RENDER_ATTACHMENT on the destination.
        usage: wgpu::TextureUsages::TEXTURE_BINDING
            | wgpu::TextureUsages::COPY_DST
            | wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    })
}

fn create_bind_group(
    device: &wgpu::Device,
    bgl: &wgpu::BindGroupLayout,
    texture: &wgpu::Texture,
    sampler: &wgpu::Sampler,
) -> wgpu::BindGroup {
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("screen_bg"),
        layout: bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}
