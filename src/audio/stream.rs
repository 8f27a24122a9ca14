// SPDX-License-Identifier: MPL-2.0
//! Radio stream backend: FFmpeg demux/decode feeding a cpal output stream.
//!
//! The player is lazy: constructing it costs nothing, and the first
//! [`PlaybackResource::play`] acquires the output device, starts the cpal
//! stream, and spawns a decode thread that pulls the network stream,
//! resamples it to the device format, and fills a bounded sample buffer.
//! Device or stream acquisition failure is the rejection the session maps
//! to its `Blocked` state; errors on an already-running stream are logged
//! and ridden out.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{debug, warn};

use super::session::PlaybackResource;
use super::Volume;
use crate::error::{AudioError, Result};

/// How much decoded audio to keep buffered ahead of the device, in seconds.
/// Small enough to keep a live stream near-live, large enough to ride out
/// network jitter.
const BUFFER_AHEAD_SECS: usize = 1;

/// Decode thread poll interval while paused or while the buffer is full.
const IDLE_POLL: Duration = Duration::from_millis(10);

/// State shared between the UI thread, the cpal callback, and the decode
/// thread. Everything is atomic so the realtime callback never blocks on
/// anything but the sample buffer lock.
struct SharedState {
    /// Current volume (stored as u32 bits of f32 for atomic access).
    volume_bits: AtomicU32,
    muted: AtomicBool,
    paused: AtomicBool,
    /// Tells the decode thread to exit.
    stop: AtomicBool,
}

impl SharedState {
    fn new(initial_volume: f32) -> Self {
        Self {
            volume_bits: AtomicU32::new(initial_volume.to_bits()),
            muted: AtomicBool::new(false),
            paused: AtomicBool::new(true),
            stop: AtomicBool::new(false),
        }
    }

    fn volume(&self) -> f32 {
        f32::from_bits(self.volume_bits.load(Ordering::Relaxed))
    }

    fn set_volume(&self, volume: f32) {
        self.volume_bits.store(volume.to_bits(), Ordering::Relaxed);
    }

    fn is_muted(&self) -> bool {
        self.muted.load(Ordering::Relaxed)
    }

    fn set_muted(&self, muted: bool) {
        self.muted.store(muted, Ordering::Relaxed);
    }

    fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Relaxed)
    }

    fn set_paused(&self, paused: bool) {
        self.paused.store(paused, Ordering::Relaxed);
    }

    fn should_stop(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }
}

type SampleBuffer = Arc<Mutex<VecDeque<f32>>>;

/// Live handles for a started stream: the cpal stream is kept alive by
/// ownership, the decode thread by the shared stop flag.
struct Output {
    _stream: cpal::Stream,
}

/// One background radio stream bound to a fixed URL.
pub struct StreamPlayer {
    url: String,
    shared: Arc<SharedState>,
    buffer: SampleBuffer,
    output: Option<Output>,
}

impl StreamPlayer {
    /// Creates an idle player. No device or network activity happens until
    /// the first play request.
    #[must_use]
    pub fn new(url: impl Into<String>, initial_volume: Volume) -> Self {
        Self {
            url: url.into(),
            shared: Arc::new(SharedState::new(initial_volume.value())),
            buffer: Arc::new(Mutex::new(VecDeque::new())),
            output: None,
        }
    }

    /// The stream URL this player is bound to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Acquires the output device, starts the cpal stream, and spawns the
    /// decode thread.
    fn start(&mut self) -> Result<()> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(AudioError::NoOutputDevice)?;

        let supported_config = device
            .default_output_config()
            .map_err(|e| AudioError::StreamRejected(format!("failed to query device config: {e}")))?;

        let sample_rate = supported_config.sample_rate().0;
        let channels = supported_config.channels();

        let stream = match supported_config.sample_format() {
            cpal::SampleFormat::F32 => self.build_stream::<f32>(&device, &supported_config.into())?,
            cpal::SampleFormat::I16 => self.build_stream::<i16>(&device, &supported_config.into())?,
            cpal::SampleFormat::U16 => self.build_stream::<u16>(&device, &supported_config.into())?,
            other => {
                return Err(AudioError::Unsupported(format!("sample format {other}")).into());
            }
        };

        stream
            .play()
            .map_err(|e| AudioError::StreamRejected(format!("failed to start stream: {e}")))?;

        let url = self.url.clone();
        let buffer = Arc::clone(&self.buffer);
        let shared = Arc::clone(&self.shared);
        std::thread::Builder::new()
            .name("radio-decode".into())
            .spawn(move || {
                if let Err(e) = decode_loop(&url, &buffer, &shared, sample_rate, channels) {
                    warn!("radio decode thread ended: {e}");
                }
            })
            .map_err(|e| AudioError::StreamRejected(format!("failed to spawn decoder: {e}")))?;

        debug!("radio output started at {sample_rate} Hz, {channels} ch");
        self.output = Some(Output { _stream: stream });
        Ok(())
    }

    /// Builds a cpal output stream for a specific sample format. The
    /// callback drains the shared buffer, applying volume and mute, and
    /// pads with silence when the buffer runs dry.
    fn build_stream<T: cpal::SizedSample + cpal::FromSample<f32>>(
        &self,
        device: &cpal::Device,
        config: &cpal::StreamConfig,
    ) -> Result<cpal::Stream> {
        let buffer = Arc::clone(&self.buffer);
        let shared = Arc::clone(&self.shared);

        let stream = device
            .build_output_stream(
                config,
                move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                    if shared.is_muted() || shared.is_paused() {
                        for sample in data.iter_mut() {
                            *sample = T::from_sample(0.0f32);
                        }
                        return;
                    }

                    let Ok(mut buf) = buffer.lock() else {
                        for sample in data.iter_mut() {
                            *sample = T::from_sample(0.0f32);
                        }
                        return;
                    };

                    // Quadratic curve keeps the linear slider perceptually
                    // linear to the ear.
                    let volume = shared.volume();
                    let perceptual_volume = volume * volume;

                    for sample in data.iter_mut() {
                        match buf.pop_front() {
                            Some(value) => {
                                // Clamp below 1.0: integer from_sample
                                // overflows at exactly 1.0.
                                let amplified =
                                    (value * perceptual_volume).clamp(-1.0, 0.999_999_9);
                                *sample = T::from_sample(amplified);
                            }
                            None => *sample = T::from_sample(0.0f32),
                        }
                    }
                },
                |err| {
                    warn!("audio output error: {err}");
                },
                None,
            )
            .map_err(|e| AudioError::StreamRejected(format!("failed to build stream: {e}")))?;

        Ok(stream)
    }
}

impl PlaybackResource for StreamPlayer {
    fn play(&mut self) -> Result<()> {
        if self.output.is_none() {
            self.start()?;
        }
        self.shared.set_paused(false);
        Ok(())
    }

    fn pause(&mut self) {
        self.shared.set_paused(true);
    }

    fn is_paused(&self) -> bool {
        self.output.is_none() || self.shared.is_paused()
    }

    fn set_volume(&mut self, volume: Volume) {
        self.shared.set_volume(volume.value());
    }

    fn set_muted(&mut self, muted: bool) {
        self.shared.set_muted(muted);
    }
}

impl Drop for StreamPlayer {
    fn drop(&mut self) {
        self.shared.stop.store(true, Ordering::Relaxed);
    }
}

/// Decode thread body: demux the network stream, decode and resample to the
/// device format, and keep the shared buffer topped up. Runs on a plain
/// thread since FFmpeg contexts are not `Send`-friendly across awaits.
fn decode_loop(
    url: &str,
    buffer: &SampleBuffer,
    shared: &SharedState,
    out_sample_rate: u32,
    out_channels: u16,
) -> Result<()> {
    ffmpeg_next::init().map_err(|e| AudioError::StreamRejected(format!("ffmpeg init: {e}")))?;

    let mut ictx = ffmpeg_next::format::input(&url)
        .map_err(|e| AudioError::StreamRejected(format!("failed to open {url}: {e}")))?;

    let input = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Audio)
        .ok_or_else(|| AudioError::StreamRejected("no audio stream".to_string()))?;
    let audio_stream_index = input.index();

    let context_decoder = ffmpeg_next::codec::context::Context::from_parameters(input.parameters())
        .map_err(|e| AudioError::StreamRejected(format!("codec context: {e}")))?;
    let mut decoder = context_decoder
        .decoder()
        .audio()
        .map_err(|e| AudioError::StreamRejected(format!("audio decoder: {e}")))?;

    debug!(
        "decoding {} ({} Hz, {} ch) for a {} Hz / {} ch device",
        decoder
            .codec()
            .map_or_else(|| "unknown".to_string(), |c| c.name().to_string()),
        decoder.rate(),
        decoder.channels(),
        out_sample_rate,
        out_channels,
    );

    // Resample to f32 interleaved at the device rate and channel count.
    // Without this the stream plays at the wrong speed or channel layout.
    let output_channel_layout = match out_channels {
        1 => ffmpeg_next::ChannelLayout::MONO,
        _ => ffmpeg_next::ChannelLayout::STEREO,
    };
    let mut resampler = ffmpeg_next::software::resampling::Context::get(
        decoder.format(),
        decoder.channel_layout(),
        decoder.rate(),
        ffmpeg_next::format::Sample::F32(ffmpeg_next::format::sample::Type::Packed),
        output_channel_layout,
        out_sample_rate,
    )
    .map_err(|e| AudioError::StreamRejected(format!("resampler: {e}")))?;

    let max_buffered = BUFFER_AHEAD_SECS * out_sample_rate as usize * out_channels as usize;

    loop {
        if shared.should_stop() {
            return Ok(());
        }

        // While paused, stop pulling from the network and let the buffer
        // drain; resume refills it.
        if shared.is_paused() {
            std::thread::sleep(IDLE_POLL);
            continue;
        }

        // Backpressure: keep at most BUFFER_AHEAD_SECS of audio queued so
        // a live stream stays near-live.
        let buffered = buffer.lock().map(|buf| buf.len()).unwrap_or(0);
        if buffered >= max_buffered {
            std::thread::sleep(IDLE_POLL);
            continue;
        }

        // Decode one frame, then loop back to re-check flags.
        let mut frame_decoded = false;
        for (stream, packet) in ictx.packets() {
            if stream.index() != audio_stream_index {
                continue;
            }

            if let Err(e) = decoder.send_packet(&packet) {
                warn!("dropping undecodable packet: {e}");
                continue;
            }

            let mut decoded_frame = ffmpeg_next::frame::Audio::empty();
            if decoder.receive_frame(&mut decoded_frame).is_ok() {
                let mut output_frame = ffmpeg_next::frame::Audio::empty();
                if let Err(e) = resampler.run(&decoded_frame, &mut output_frame) {
                    warn!("resampling failed: {e}");
                    continue;
                }

                let samples = extract_samples(&output_frame, out_channels);
                if let Ok(mut buf) = buffer.lock() {
                    buf.extend(samples);
                }

                frame_decoded = true;
                break;
            }
        }

        if !frame_decoded {
            // Live streams are not supposed to end; a finite source (e.g. a
            // local mp3 used in development) simply goes silent.
            debug!("radio stream ended");
            return Ok(());
        }
    }
}

/// Extracts interleaved f32 samples from a resampled frame.
fn extract_samples(frame: &ffmpeg_next::frame::Audio, channels: u16) -> Vec<f32> {
    let data = frame.data(0);
    let sample_count = frame.samples() * channels as usize;

    let mut samples = Vec::with_capacity(sample_count);
    for i in 0..sample_count {
        let offset = i * 4;
        if offset + 4 <= data.len() {
            let bytes = [
                data[offset],
                data[offset + 1],
                data[offset + 2],
                data[offset + 3],
            ];
            samples.push(f32::from_le_bytes(bytes));
        }
    }

    samples
}
