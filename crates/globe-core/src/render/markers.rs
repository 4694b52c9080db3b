use super::helpers;
use crate::config::GlobeConfig;
use crate::marker::{MarkerInstance, MarkerKind};
use crate::scene::GlobeScene;

/// Geometry and instances for one marker kind.
pub(crate) struct MarkerBatch {
    pub(crate) geometry: wgpu::Buffer,
    pub(crate) vertex_count: u32,
    pub(crate) instances: wgpu::Buffer,
    pub(crate) instance_count: u32,
}

pub(crate) struct MarkerResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) ordinary: MarkerBatch,
    pub(crate) notable: MarkerBatch,
}

impl MarkerResources {
    pub(crate) fn batch(&self, kind: MarkerKind) -> &MarkerBatch {
        match kind {
            MarkerKind::Ordinary => &self.ordinary,
            MarkerKind::Notable => &self.notable,
        }
    }
}

fn create_batch(
    device: &wgpu::Device,
    config: &GlobeConfig,
    scene: &GlobeScene,
    kind: MarkerKind,
) -> MarkerBatch {
    let outline = config.markers.for_kind(kind).shape.vertices();
    let instances = scene.instances(config, kind);
    let (geo_label, inst_label) = match kind {
        MarkerKind::Ordinary => ("ordinary_geometry", "ordinary_instances"),
        MarkerKind::Notable => ("notable_geometry", "notable_instances"),
    };
    MarkerBatch {
        geometry: helpers::vertex_buffer(device, geo_label, &outline),
        vertex_count: outline.len() as u32,
        instances: helpers::vertex_buffer(device, inst_label, &instances),
        instance_count: instances.len() as u32,
    }
}

pub(crate) fn create_marker_resources(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    color_format: wgpu::TextureFormat,
    config: &GlobeConfig,
    scene: &GlobeScene,
) -> MarkerResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("markers_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::MARKERS_WGSL.into()),
    });
    let vertex_buffers = [
        // slot 0: outline in the marker plane
        wgpu::VertexBufferLayout {
            array_stride: (std::mem::size_of::<f32>() * 2) as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 0,
                shader_location: 0,
            }],
        },
        // slot 1: instance data
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MarkerInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 1,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32,
                    offset: 12,
                    shader_location: 2,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 16,
                    shader_location: 3,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 32,
                    shader_location: 4,
                },
            ],
        },
    ];
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("markers_pipeline"),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &vertex_buffers,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        // markers are visible from both sides
        primitive: wgpu::PrimitiveState {
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: Some(helpers::depth_state(true)),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    MarkerResources {
        pipeline,
        ordinary: create_batch(device, config, scene, MarkerKind::Ordinary),
        notable: create_batch(device, config, scene, MarkerKind::Notable),
    }
}
