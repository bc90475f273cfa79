//! H.264/AAC re-encoding export
//!
//! Opens the staged source, seeks to the start offset, decodes the video and
//! audio streams across `[start, end)`, re-encodes them with the fixed
//! H.264/AAC codec pair, and muxes the result into an MP4. The encoded
//! output goes to a scratch file next to the destination and is renamed
//! into place after the trailer is on disk, so a failed export never
//! clobbers a previous artifact and re-runs overwrite it atomically.

use std::path::{Path, PathBuf};
use std::time::Instant;

use ffmpeg_next as ffmpeg;

use ffmpeg::channel_layout::ChannelLayout;
use ffmpeg::util::picture;
use ffmpeg::{codec, encoder, format, frame, media, software, Dictionary, Packet, Rational};
use tracing::{debug, info};

use crate::domain::errors::{CutError, CutResult};
use crate::domain::model::{OutputArtifact, TrimRequest};
use crate::engine::{ClipExporter, ExportSettings, TrimPhase};

const VIDEO_CODEC: codec::Id = codec::Id::H264;
const AUDIO_CODEC: codec::Id = codec::Id::AAC;

/// FFmpeg-backed exporter with the fixed H.264/AAC codec pair
pub struct FfmpegExporter;

impl FfmpegExporter {
    /// Create a new exporter
    pub fn new() -> Self {
        Self
    }
}

impl Default for FfmpegExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipExporter for FfmpegExporter {
    fn export(
        &self,
        request: &TrimRequest,
        settings: &ExportSettings,
    ) -> CutResult<OutputArtifact> {
        let started = Instant::now();
        info!("Starting trim export");
        info!("Input: {}", request.source().display());
        info!("Output: {}", settings.output_path.display());
        info!(
            "Range: {} - {}",
            request.range().start(),
            request.range().end()
        );
        debug!("Phase: {:?}", TrimPhase::Trimming);

        let scratch = ScratchOutput::reserve(&settings.output_path)?;
        run_export(request, settings, scratch.path())?;
        let artifact = scratch.commit(&settings.output_path)?;

        info!(
            "Trim export completed in {:.2}s ({} bytes)",
            started.elapsed().as_secs_f64(),
            artifact.file_size
        );
        debug!("Phase: {:?}", TrimPhase::Done);
        Ok(artifact)
    }
}

/// Scratch file that becomes the artifact on success and is removed on
/// failure
struct ScratchOutput {
    file: tempfile::NamedTempFile,
}

impl ScratchOutput {
    fn reserve(final_path: &Path) -> CutResult<Self> {
        let dir = match final_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                std::fs::create_dir_all(parent)?;
                parent.to_path_buf()
            }
            _ => PathBuf::from("."),
        };
        let file = tempfile::Builder::new()
            .prefix(".subclip-")
            .suffix(".mp4")
            .tempfile_in(dir)?;
        Ok(Self { file })
    }

    fn path(&self) -> &Path {
        self.file.path()
    }

    fn commit(self, final_path: &Path) -> CutResult<OutputArtifact> {
        let file = self.file.persist(final_path).map_err(|e| CutError::Export {
            message: format!("Failed to move output into place: {}", e),
        })?;
        let file_size = file.metadata()?.len();
        Ok(OutputArtifact::new(final_path.to_path_buf(), file_size))
    }
}

fn export_err(context: &'static str) -> impl Fn(ffmpeg::Error) -> CutError {
    move |e| CutError::Export {
        message: format!("{}: {}", context, e),
    }
}

fn seconds_to_ts(seconds: f64, time_base: Rational) -> i64 {
    let base = f64::from(time_base);
    if base > 0.0 {
        (seconds / base) as i64
    } else {
        0
    }
}

fn run_export(
    request: &TrimRequest,
    settings: &ExportSettings,
    scratch_path: &Path,
) -> CutResult<()> {
    let start = request.range().start().as_seconds();
    let end = request.range().end().as_seconds();

    let mut ictx =
        format::input(&request.source()).map_err(export_err("Failed to open input file"))?;
    let mut octx =
        format::output(&scratch_path).map_err(export_err("Failed to create output file"))?;

    let mut video = VideoLane::open(&ictx, &mut octx, settings, start, end)?;
    let mut audio = AudioLane::open(&ictx, &mut octx, start, end)?;

    octx.write_header()
        .map_err(export_err("Failed to write output header"))?;

    // Muxer-final stream time bases, fixed by write_header
    let video_tb = octx
        .stream(video.ost_index)
        .map(|s| s.time_base())
        .unwrap_or(video.ist_time_base);
    let audio_tb = audio
        .as_ref()
        .and_then(|lane| octx.stream(lane.ost_index))
        .map(|s| s.time_base());

    // Land on the keyframe at or before the start offset; exact trimming
    // happens at the frame filter below
    let start_av = (start * f64::from(ffmpeg::ffi::AV_TIME_BASE)) as i64;
    if start > 0.0 {
        ictx.seek(start_av, ..start_av)
            .map_err(export_err("Failed to seek to start time"))?;
    }

    for (stream, packet) in ictx.packets() {
        let index = stream.index();
        if index == video.ist_index && !video.finished {
            video.transcode(&packet, &mut octx, video_tb)?;
        } else if let (Some(lane), Some(tb)) = (audio.as_mut(), audio_tb) {
            if index == lane.ist_index && !lane.finished {
                lane.transcode(&packet, &mut octx, tb)?;
            }
        }

        let audio_done = audio.as_ref().map_or(true, |lane| lane.finished);
        if video.finished && audio_done {
            break;
        }
    }

    video.finish(&mut octx, video_tb)?;
    if let (Some(lane), Some(tb)) = (audio.as_mut(), audio_tb) {
        lane.finish(&mut octx, tb)?;
    }

    octx.write_trailer()
        .map_err(export_err("Failed to write output trailer"))?;
    Ok(())
}

/// Video decode/encode path
struct VideoLane {
    ist_index: usize,
    ost_index: usize,
    ist_time_base: Rational,
    decoder: codec::decoder::Video,
    encoder: codec::encoder::video::Encoder,
    start_ts: i64,
    end_ts: i64,
    finished: bool,
}

impl VideoLane {
    fn open(
        ictx: &format::context::Input,
        octx: &mut format::context::Output,
        settings: &ExportSettings,
        start: f64,
        end: f64,
    ) -> CutResult<Self> {
        let ist = ictx
            .streams()
            .best(media::Type::Video)
            .ok_or_else(|| CutError::Export {
                message: "No video stream found in input file".to_string(),
            })?;
        let ist_index = ist.index();
        let ist_time_base = ist.time_base();

        let decoder = codec::context::Context::from_parameters(ist.parameters())
            .map_err(export_err("Failed to create video decoder context"))?
            .decoder()
            .video()
            .map_err(export_err("Failed to open video decoder"))?;

        let codec = encoder::find(VIDEO_CODEC).ok_or_else(|| CutError::Export {
            message: "H.264 encoder not available".to_string(),
        })?;
        let global_header = octx
            .format()
            .flags()
            .contains(format::Flags::GLOBAL_HEADER);
        let mut ost = octx
            .add_stream(codec)
            .map_err(export_err("Failed to add video stream"))?;
        let ost_index = ost.index();

        let mut enc = codec::context::Context::from_parameters(ost.parameters())
            .map_err(export_err("Failed to create video encoder context"))?
            .encoder()
            .video()
            .map_err(export_err("Failed to create video encoder"))?;
        enc.set_width(decoder.width());
        enc.set_height(decoder.height());
        enc.set_aspect_ratio(decoder.aspect_ratio());
        enc.set_format(decoder.format());
        enc.set_frame_rate(decoder.frame_rate());
        enc.set_time_base(ist_time_base);
        if global_header {
            enc.set_flags(codec::Flags::GLOBAL_HEADER);
        }

        let mut opts = Dictionary::new();
        opts.set("preset", &settings.preset);
        let crf = settings.crf.to_string();
        opts.set("crf", &crf);

        let encoder = enc
            .open_with(opts)
            .map_err(export_err("Failed to open H.264 encoder"))?;
        ost.set_parameters(&encoder);

        Ok(Self {
            ist_index,
            ost_index,
            ist_time_base,
            decoder,
            encoder,
            start_ts: seconds_to_ts(start, ist_time_base),
            end_ts: seconds_to_ts(end, ist_time_base),
            finished: false,
        })
    }

    fn transcode(
        &mut self,
        packet: &Packet,
        octx: &mut format::context::Output,
        ost_time_base: Rational,
    ) -> CutResult<()> {
        self.decoder
            .send_packet(packet)
            .map_err(export_err("Failed to decode video packet"))?;
        self.drain_decoder(octx, ost_time_base)
    }

    fn drain_decoder(
        &mut self,
        octx: &mut format::context::Output,
        ost_time_base: Rational,
    ) -> CutResult<()> {
        let mut frame = frame::Video::empty();
        while self.decoder.receive_frame(&mut frame).is_ok() {
            let ts = match frame.timestamp() {
                Some(ts) => ts,
                None => continue,
            };
            if ts < self.start_ts {
                continue;
            }
            if ts >= self.end_ts {
                self.finished = true;
                continue;
            }

            // Rebase so the clip starts at zero
            frame.set_pts(Some(ts - self.start_ts));
            frame.set_kind(picture::Type::None);
            self.encoder
                .send_frame(&frame)
                .map_err(export_err("Failed to encode video frame"))?;
            self.receive_packets(octx, ost_time_base)?;
        }
        Ok(())
    }

    fn receive_packets(
        &mut self,
        octx: &mut format::context::Output,
        ost_time_base: Rational,
    ) -> CutResult<()> {
        let mut encoded = Packet::empty();
        while self.encoder.receive_packet(&mut encoded).is_ok() {
            encoded.set_stream(self.ost_index);
            encoded.rescale_ts(self.ist_time_base, ost_time_base);
            encoded
                .write_interleaved(octx)
                .map_err(export_err("Failed to write video packet"))?;
        }
        Ok(())
    }

    fn finish(
        &mut self,
        octx: &mut format::context::Output,
        ost_time_base: Rational,
    ) -> CutResult<()> {
        self.decoder
            .send_eof()
            .map_err(export_err("Failed to flush video decoder"))?;
        self.drain_decoder(octx, ost_time_base)?;
        self.encoder
            .send_eof()
            .map_err(export_err("Failed to flush video encoder"))?;
        self.receive_packets(octx, ost_time_base)
    }
}

/// Audio decode/resample/encode path; absent when the source has no audio
struct AudioLane {
    ist_index: usize,
    ost_index: usize,
    decoder: codec::decoder::Audio,
    encoder: codec::encoder::audio::Encoder,
    resampler: software::resampling::Context,
    enc_time_base: Rational,
    start_ts: i64,
    end_ts: i64,
    next_pts: i64,
    rate: u32,
    finished: bool,
}

impl AudioLane {
    fn open(
        ictx: &format::context::Input,
        octx: &mut format::context::Output,
        start: f64,
        end: f64,
    ) -> CutResult<Option<Self>> {
        let ist = match ictx.streams().best(media::Type::Audio) {
            Some(ist) => ist,
            None => return Ok(None),
        };
        let ist_index = ist.index();
        let ist_time_base = ist.time_base();

        let decoder = codec::context::Context::from_parameters(ist.parameters())
            .map_err(export_err("Failed to create audio decoder context"))?
            .decoder()
            .audio()
            .map_err(export_err("Failed to open audio decoder"))?;

        let rate = decoder.rate();
        if rate == 0 {
            // Stream is declared but unusable; trim video only
            return Ok(None);
        }
        let enc_time_base = Rational::new(1, rate as i32);

        let codec = encoder::find(AUDIO_CODEC).ok_or_else(|| CutError::Export {
            message: "AAC encoder not available".to_string(),
        })?;
        let audio_codec = codec
            .audio()
            .map_err(export_err("AAC encoder reports no audio capabilities"))?;
        let sample_format = audio_codec
            .formats()
            .and_then(|mut formats| formats.next())
            .unwrap_or(format::Sample::F32(format::sample::Type::Planar));
        let channel_layout = audio_codec
            .channel_layouts()
            .map(|layouts| layouts.best(decoder.channel_layout().channels()))
            .unwrap_or(ChannelLayout::STEREO);

        let global_header = octx
            .format()
            .flags()
            .contains(format::Flags::GLOBAL_HEADER);
        let mut ost = octx
            .add_stream(codec)
            .map_err(export_err("Failed to add audio stream"))?;
        let ost_index = ost.index();

        let mut enc = codec::context::Context::from_parameters(ost.parameters())
            .map_err(export_err("Failed to create audio encoder context"))?
            .encoder()
            .audio()
            .map_err(export_err("Failed to create audio encoder"))?;
        enc.set_rate(rate as i32);
        enc.set_channel_layout(channel_layout);
        enc.set_format(sample_format);
        enc.set_bit_rate(decoder.bit_rate());
        enc.set_time_base(enc_time_base);
        if global_header {
            enc.set_flags(codec::Flags::GLOBAL_HEADER);
        }

        let encoder = enc
            .open_as(codec)
            .map_err(export_err("Failed to open AAC encoder"))?;
        ost.set_parameters(&encoder);

        let resampler = software::resampler(
            (decoder.format(), decoder.channel_layout(), rate),
            (sample_format, channel_layout, rate),
        )
        .map_err(export_err("Failed to create audio resampler"))?;

        Ok(Some(Self {
            ist_index,
            ost_index,
            decoder,
            encoder,
            resampler,
            enc_time_base,
            start_ts: seconds_to_ts(start, ist_time_base),
            end_ts: seconds_to_ts(end, ist_time_base),
            next_pts: 0,
            rate,
            finished: false,
        }))
    }

    fn transcode(
        &mut self,
        packet: &Packet,
        octx: &mut format::context::Output,
        ost_time_base: Rational,
    ) -> CutResult<()> {
        self.decoder
            .send_packet(packet)
            .map_err(export_err("Failed to decode audio packet"))?;
        self.drain_decoder(octx, ost_time_base)
    }

    fn drain_decoder(
        &mut self,
        octx: &mut format::context::Output,
        ost_time_base: Rational,
    ) -> CutResult<()> {
        let mut decoded = frame::Audio::empty();
        while self.decoder.receive_frame(&mut decoded).is_ok() {
            let ts = match decoded.timestamp() {
                Some(ts) => ts,
                None => continue,
            };
            if ts < self.start_ts {
                continue;
            }
            if ts >= self.end_ts {
                self.finished = true;
                continue;
            }

            let mut resampled = frame::Audio::empty();
            self.resampler
                .run(&decoded, &mut resampled)
                .map_err(export_err("Failed to resample audio frame"))?;
            resampled.set_rate(self.rate);
            resampled.set_pts(Some(self.next_pts));
            self.next_pts += resampled.samples() as i64;

            self.encoder
                .send_frame(&resampled)
                .map_err(export_err("Failed to encode audio frame"))?;
            self.receive_packets(octx, ost_time_base)?;
        }
        Ok(())
    }

    fn receive_packets(
        &mut self,
        octx: &mut format::context::Output,
        ost_time_base: Rational,
    ) -> CutResult<()> {
        let mut encoded = Packet::empty();
        while self.encoder.receive_packet(&mut encoded).is_ok() {
            encoded.set_stream(self.ost_index);
            encoded.rescale_ts(self.enc_time_base, ost_time_base);
            encoded
                .write_interleaved(octx)
                .map_err(export_err("Failed to write audio packet"))?;
        }
        Ok(())
    }

    fn finish(
        &mut self,
        octx: &mut format::context::Output,
        ost_time_base: Rational,
    ) -> CutResult<()> {
        self.decoder
            .send_eof()
            .map_err(export_err("Failed to flush audio decoder"))?;
        self.drain_decoder(octx, ost_time_base)?;
        self.encoder
            .send_eof()
            .map_err(export_err("Failed to flush audio encoder"))?;
        self.receive_packets(octx, ost_time_base)
    }
}
