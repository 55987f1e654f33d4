use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use bytemuck::{Pod, Zeroable};

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::image::{Color, Image};
use crate::render::{check_dimensions, Renderer, Timing};

/// Default location of the device kernel, relative to the working directory.
pub const KERNEL_PATH: &str = "shaders/mandelbrot.wgsl";

/// Must match the `@workgroup_size` declared in the kernel source.
const WORKGROUP_SIZE: u32 = 256;

/// Uniform block handed to the kernel. Layout mirrors `Params` in the WGSL
/// source.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Params {
    width: u32,
    height: u32,
    max_iterations: u32,
    zoom: f32,
}

/// Device offload: one work item per pixel evaluates the same mapping and
/// escape loop as the host strategies, entirely in device memory, and the
/// packed pixel buffer is read back in one bulk transfer. The host blocks
/// on completion; there is no fallback to a host strategy on failure. All
/// device resources are scoped to this call and released on drop, on every
/// exit path.
pub struct GpuRenderer {
    kernel_path: PathBuf,
}

impl GpuRenderer {
    pub fn new<P: Into<PathBuf>>(kernel_path: P) -> Self {
        Self {
            kernel_path: kernel_path.into(),
        }
    }

    async fn run(&self, img: &mut Image, config: &RenderConfig) -> Result<Timing, RenderError> {
        let source =
            fs::read_to_string(&self.kernel_path).map_err(|source| RenderError::KernelSource {
                path: self.kernel_path.clone(),
                source,
            })?;

        let instance = wgpu::Instance::default();
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .ok_or(RenderError::NoAdapter)?;
        log::debug!("rendering on {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("mandelbrot"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                },
                None,
            )
            .await?;

        let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("mandelbrot_kernel"),
            source: wgpu::ShaderSource::Wgsl(source.into()),
        });

        let bind_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bind_layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::COMPUTE,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::COMPUTE,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Storage { read_only: false },
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pipeline_layout"),
            bind_group_layouts: &[&bind_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_compute_pipeline(&wgpu::ComputePipelineDescriptor {
            label: Some("mandelbrot_pipeline"),
            layout: Some(&pipeline_layout),
            module: &module,
            entry_point: "mandelbrot",
        });

        let transfer_size = img.size_in_bytes() as u64;
        let storage = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("pixels"),
            size: transfer_size,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_SRC,
            mapped_at_creation: false,
        });
        let readback = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("readback"),
            size: transfer_size,
            usage: wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let params = Params {
            width: config.width as u32,
            height: config.height as u32,
            max_iterations: config.max_iterations,
            zoom: config.zoom as f32,
        };
        let params_buf = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("params"),
            size: std::mem::size_of::<Params>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        queue.write_buffer(&params_buf, 0, bytemuck::bytes_of(&params));

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bind_group"),
            layout: &bind_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: params_buf.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: storage.as_entire_binding(),
                },
            ],
        });

        let mut encoder =
            device.create_command_encoder(&wgpu::CommandEncoderDescriptor { label: Some("enc") });
        {
            let mut pass = encoder.begin_compute_pass(&wgpu::ComputePassDescriptor {
                label: Some("mandelbrot_pass"),
                timestamp_writes: None,
            });
            pass.set_pipeline(&pipeline);
            pass.set_bind_group(0, &bind_group, &[]);
            let groups = (img.size() as u32 + WORKGROUP_SIZE - 1) / WORKGROUP_SIZE;
            pass.dispatch_workgroups(groups, 1, 1);
        }
        encoder.copy_buffer_to_buffer(&storage, 0, &readback, 0, transfer_size);

        // The clock covers kernel execution and readback, not device setup.
        let start = Instant::now();
        queue.submit(Some(encoder.finish()));

        let slice = readback.slice(..);
        let (sender, receiver) = futures_intrusive::channel::shared::oneshot_channel();
        slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = sender.send(result);
        });
        device.poll(wgpu::Maintain::Wait);
        receiver.receive().await.ok_or(RenderError::DeviceLost)??;

        let colors: Vec<Color> = {
            let data = slice.get_mapped_range();
            bytemuck::cast_slice::<u8, u32>(&data)
                .iter()
                .map(|&word| Color::from_packed(word))
                .collect()
        };
        readback.unmap();
        let elapsed = start.elapsed();

        img.fill_rows(0, &colors);
        Ok(Timing::new(config, None, elapsed))
    }
}

impl Default for GpuRenderer {
    fn default() -> Self {
        Self::new(KERNEL_PATH)
    }
}

impl Renderer for GpuRenderer {
    fn render(&self, img: &mut Image, config: &RenderConfig) -> Result<Timing, RenderError> {
        check_dimensions(img, config);
        pollster::block_on(self.run(img, config))
    }
}
