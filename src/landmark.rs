//! Anatomical landmark scheme (33 points, conventional body-landmark numbering)

/// Number of landmarks in every pose
pub const LANDMARK_COUNT: usize = 33;

/// Named landmark; the discriminant is the index into a pose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Landmark {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl Landmark {
    /// All landmarks in index order
    pub const ALL: [Landmark; LANDMARK_COUNT] = [
        Landmark::Nose,
        Landmark::LeftEyeInner,
        Landmark::LeftEye,
        Landmark::LeftEyeOuter,
        Landmark::RightEyeInner,
        Landmark::RightEye,
        Landmark::RightEyeOuter,
        Landmark::LeftEar,
        Landmark::RightEar,
        Landmark::MouthLeft,
        Landmark::MouthRight,
        Landmark::LeftShoulder,
        Landmark::RightShoulder,
        Landmark::LeftElbow,
        Landmark::RightElbow,
        Landmark::LeftWrist,
        Landmark::RightWrist,
        Landmark::LeftPinky,
        Landmark::RightPinky,
        Landmark::LeftIndex,
        Landmark::RightIndex,
        Landmark::LeftThumb,
        Landmark::RightThumb,
        Landmark::LeftHip,
        Landmark::RightHip,
        Landmark::LeftKnee,
        Landmark::RightKnee,
        Landmark::LeftAnkle,
        Landmark::RightAnkle,
        Landmark::LeftHeel,
        Landmark::RightHeel,
        Landmark::LeftFootIndex,
        Landmark::RightFootIndex,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Landmark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Landmark::Nose => "nose",
            Landmark::LeftEyeInner => "left eye (inner)",
            Landmark::LeftEye => "left eye",
            Landmark::LeftEyeOuter => "left eye (outer)",
            Landmark::RightEyeInner => "right eye (inner)",
            Landmark::RightEye => "right eye",
            Landmark::RightEyeOuter => "right eye (outer)",
            Landmark::LeftEar => "left ear",
            Landmark::RightEar => "right ear",
            Landmark::MouthLeft => "mouth (left)",
            Landmark::MouthRight => "mouth (right)",
            Landmark::LeftShoulder => "left shoulder",
            Landmark::RightShoulder => "right shoulder",
            Landmark::LeftElbow => "left elbow",
            Landmark::RightElbow => "right elbow",
            Landmark::LeftWrist => "left wrist",
            Landmark::RightWrist => "right wrist",
            Landmark::LeftPinky => "left pinky",
            Landmark::RightPinky => "right pinky",
            Landmark::LeftIndex => "left index",
            Landmark::RightIndex => "right index",
            Landmark::LeftThumb => "left thumb",
            Landmark::RightThumb => "right thumb",
            Landmark::LeftHip => "left hip",
            Landmark::RightHip => "right hip",
            Landmark::LeftKnee => "left knee",
            Landmark::RightKnee => "right knee",
            Landmark::LeftAnkle => "left ankle",
            Landmark::RightAnkle => "right ankle",
            Landmark::LeftHeel => "left heel",
            Landmark::RightHeel => "right heel",
            Landmark::LeftFootIndex => "left foot index",
            Landmark::RightFootIndex => "right foot index",
        };
        write!(f, "{}", name)
    }
}
