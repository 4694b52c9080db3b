//! wgpu resources for drawing a [`GlobeScene`]. Surface, device and queue are
//! owned by the frontend; this module only records and submits the scene
//! passes into whatever color target it is given.

use crate::config::GlobeConfig;
use crate::marker::MarkerKind;
use crate::scene::GlobeScene;
use crate::uniforms::SceneUniforms;

mod globe;
mod helpers;
mod markers;

use globe::{create_globe_resources, GlobeResources};
use markers::{create_marker_resources, MarkerResources};

pub use helpers::DEPTH_FORMAT;

// Opaque notable markers first, then the translucent dots, then the globe.
const DRAW_ORDER: [MarkerKind; 2] = [MarkerKind::Notable, MarkerKind::Ordinary];

pub struct GlobeRenderer {
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    markers: MarkerResources,
    globe: GlobeResources,
    depth_view: wgpu::TextureView,
    width: u32,
    height: u32,
}

impl GlobeRenderer {
    pub fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        config: &GlobeConfig,
        scene: &GlobeScene,
        width: u32,
        height: u32,
    ) -> Self {
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        let markers = create_marker_resources(device, &layout, color_format, config, scene);
        let globe = create_globe_resources(device, &layout, color_format, config);
        let depth_view = helpers::create_depth_texture(device, width, height);
        log::info!(
            "[render] ordinary={} notable={} globe_indices={}",
            markers.ordinary.instance_count,
            markers.notable.instance_count,
            globe.index_count
        );

        Self {
            uniform_buffer,
            bind_group,
            markers,
            globe,
            depth_view,
            width,
            height,
        }
    }

    pub fn resize_if_needed(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.depth_view = helpers::create_depth_texture(device, width, height);
        }
    }

    /// Clear `target` to transparent black and draw markers and globe.
    pub fn render(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        target: &wgpu::TextureView,
        uniforms: &SceneUniforms,
    ) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("encoder"),
        });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.bind_group, &[]);

            rpass.set_pipeline(&self.markers.pipeline);
            for kind in DRAW_ORDER {
                let batch = self.markers.batch(kind);
                if batch.instance_count == 0 {
                    continue;
                }
                rpass.set_vertex_buffer(0, batch.geometry.slice(..));
                rpass.set_vertex_buffer(1, batch.instances.slice(..));
                rpass.draw(0..batch.vertex_count, 0..batch.instance_count);
            }

            rpass.set_pipeline(&self.globe.pipeline);
            rpass.set_vertex_buffer(0, self.globe.vertex_buffer.slice(..));
            rpass.set_index_buffer(self.globe.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..self.globe.index_count, 0, 0..1);
        }
        queue.submit(Some(encoder.finish()));
    }
}
